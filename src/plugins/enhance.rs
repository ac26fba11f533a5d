//! Enhance plugin: generative quality improvement (`e_enhance`).

use serde::Deserialize;

use super::overlays::lenient_flag;
use crate::asset::Transformable;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EnhanceOptions {
    #[serde(default, deserialize_with = "lenient_flag")]
    pub enhance: bool,
}

pub fn apply<T: Transformable>(asset: &mut T, options: &EnhanceOptions) {
    if options.enhance {
        asset.add_transformation("e_enhance");
    }
}
