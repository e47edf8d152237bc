pub mod descriptor;
pub mod summary;

pub trait IdentifiableDescriptor {
    fn id(&self) -> &str;
    fn kind(&self) -> descriptor::ModelType;
}
