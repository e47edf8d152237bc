use serde::{Deserialize, Deserializer, Serialize};

use super::IdentifiableDescriptor;

/// Root entity types this tool knows how to list.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelType {
    Flow,
    Process,
}

/// Lightweight reference to a flow or process as returned by
/// `data/get/descriptors`, without the full data set.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Descriptor {
    #[serde(rename = "@type", default)]
    pub model_type: Option<ModelType>,
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "category_path")]
    pub category: Option<String>,
    #[serde(default)]
    pub flow_type: Option<String>,
    #[serde(default)]
    pub process_type: Option<String>,
}

impl Descriptor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            model_type: None,
            id: id.into(),
            name: name.into(),
            category: None,
            flow_type: None,
            process_type: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_flow_type(mut self, flow_type: impl Into<String>) -> Self {
        self.model_type = Some(ModelType::Flow);
        self.flow_type = Some(flow_type.into());
        self
    }

    pub fn with_process_type(mut self, process_type: impl Into<String>) -> Self {
        self.model_type = Some(ModelType::Process);
        self.process_type = Some(process_type.into());
        self
    }

    /// Empty categories are treated the same as absent ones.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// `flowType` or `processType`, whichever the server sent.
    pub fn type_tag(&self) -> Option<&str> {
        self.flow_type
            .as_deref()
            .or(self.process_type.as_deref())
            .filter(|t| !t.is_empty())
    }
}

// Older servers send the category as a reference object instead of a path.
fn category_path<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Category {
        Path(String),
        Ref { name: String },
    }

    Ok(
        Option::<Category>::deserialize(deserializer)?.map(|c| match c {
            Category::Path(path) => path,
            Category::Ref { name } => name,
        }),
    )
}

impl IdentifiableDescriptor for Descriptor {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> ModelType {
        match (self.model_type, &self.process_type) {
            (Some(t), _) => t,
            (None, Some(_)) => ModelType::Process,
            (None, None) => ModelType::Flow,
        }
    }
}
