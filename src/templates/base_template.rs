/// Properties shared by every page template.
pub trait BaseTemplate {
    fn base_url(&self) -> &str;
    fn page_title(&self) -> &str;
}

/// Macro to implement BaseTemplate for a struct with standard fields
#[macro_export]
macro_rules! impl_base_template {
    ($struct_name:ty) => {
        impl $crate::templates::BaseTemplate for $struct_name {
            fn base_url(&self) -> &str {
                &self.base_url
            }
            fn page_title(&self) -> &str {
                &self.page_title
            }
        }
    };
}
