//! Restore plugin: generative restoration of damaged or compressed images.

use serde::Deserialize;

use super::overlays::lenient_flag;
use crate::asset::Transformable;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RestoreOptions {
    #[serde(default, deserialize_with = "lenient_flag")]
    pub restore: bool,
}

pub fn apply<T: Transformable>(asset: &mut T, options: &RestoreOptions) {
    if options.restore {
        asset.add_transformation("e_gen_restore");
    }
}
