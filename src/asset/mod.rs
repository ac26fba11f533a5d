//! Delivery asset handles.
//!
//! Plugins never build URLs themselves; they append transformation
//! components to a [`Transformable`] handle. [`ImageAsset`] is the concrete
//! handle that renders those components into a delivery URL:
//!
//! ```text
//! https://res.cloudinary.com/<cloud>/image/upload/<t1>/<t2>[/f_<format>]/<public_id>
//! ```

use crate::config::CloudConfig;

/// A handle that accumulates transformation components in call order.
///
/// Each component is one `/`-separated URL segment group; a component may
/// itself contain `/` (a layer and its apply step are added together).
pub trait Transformable {
    /// Append a component after all previously added ones
    fn add_transformation(&mut self, transformation: impl Into<String>);

    /// Components added so far, oldest first
    fn transformations(&self) -> &[String];

    /// Override the delivery format; the last call wins
    fn set_format(&mut self, format: impl Into<String>);
}

/// An image in a cloud account plus the transformations chained onto it.
#[derive(Debug, Clone)]
pub struct ImageAsset {
    public_id: String,
    base_url: String,
    transformations: Vec<String>,
    format: Option<String>,
}

impl ImageAsset {
    pub fn new(public_id: impl Into<String>, config: &CloudConfig) -> Self {
        Self {
            public_id: public_id.into(),
            base_url: config.base_url(),
            transformations: Vec::new(),
            format: None,
        }
    }

    pub fn public_id(&self) -> &str {
        &self.public_id
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    /// Transformation path without host or public ID. A format override is
    /// the final component.
    pub fn transformation_path(&self) -> String {
        let format = self.format.as_ref().map(|f| format!("f_{}", f));
        self.transformations
            .iter()
            .cloned()
            .chain(format)
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Full delivery URL
    pub fn to_url(&self) -> String {
        let path = self.transformation_path();
        if path.is_empty() {
            format!("{}/{}", self.base_url, self.public_id)
        } else {
            format!("{}/{}/{}", self.base_url, path, self.public_id)
        }
    }
}

impl Transformable for ImageAsset {
    fn add_transformation(&mut self, transformation: impl Into<String>) {
        let transformation = transformation.into();
        if transformation.is_empty() {
            return;
        }
        self.transformations.push(transformation);
    }

    fn transformations(&self) -> &[String] {
        &self.transformations
    }

    fn set_format(&mut self, format: impl Into<String>) {
        let format = format.into();
        self.format = (!format.is_empty()).then_some(format);
    }
}
