use crate::schema::descriptor::Descriptor;

pub mod analysis;
pub mod csv;
pub mod text;

/// Stable, case-insensitive ordering by name.
pub fn sort_by_name(descriptors: &[Descriptor]) -> Vec<&Descriptor> {
    let mut sorted: Vec<&Descriptor> = descriptors.iter().collect();
    sorted.sort_by_cached_key(|d| d.name.to_lowercase());
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_ignores_case() {
        let flows = vec![
            Descriptor::new("u2", "steel"),
            Descriptor::new("u1", "Electricity, AC"),
            Descriptor::new("u3", "Aluminium"),
        ];

        let names: Vec<&str> = sort_by_name(&flows).iter().map(|d| d.name.as_str()).collect();

        assert_eq!(names, vec!["Aluminium", "Electricity, AC", "steel"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_names() {
        let flows = vec![
            Descriptor::new("a", "Water"),
            Descriptor::new("b", "carbon dioxide"),
            Descriptor::new("c", "water"),
            Descriptor::new("d", "WATER"),
        ];

        let ids: Vec<&str> = sort_by_name(&flows).iter().map(|d| d.id.as_str()).collect();

        assert_eq!(ids, vec!["b", "a", "c", "d"]);
    }
}
