mod aggregate;
mod render;
mod types;
mod validate;

pub use aggregate::{PageSeo, SeoAggregator};
pub use render::{
    preload_as_attr, render_analytics_codes, render_meta_tags, render_resource_tags,
    render_structured_data,
};
pub use types::{MetaTagPair, SeoRecord};
pub use validate::{validate, SeoReport};
