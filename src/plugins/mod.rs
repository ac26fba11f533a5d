//! URL loader plugins.
//!
//! Each plugin owns one group of fields in [`ImageOptions`] and turns them
//! into transformation components on the asset. The set is fixed, so
//! [`crate::loader::construct_url`] runs them in a static order.

pub mod default_image;
pub mod enhance;
pub mod extract;
pub mod fill_background;
pub mod overlays;
pub mod prompt;
pub mod recolor;
pub mod remove;
pub mod replace;
pub mod replace_background;
pub mod restore;
pub mod underlays;
pub mod zoompan;

use crate::asset::Transformable;
use crate::error::LoaderError;
use crate::types::ImageOptions;

/// A fixed option-to-transformation step
pub trait Plugin {
    /// Name used in log events
    const NAME: &'static str;

    fn apply<T: Transformable>(asset: &mut T, options: &ImageOptions) -> Result<(), LoaderError>;
}

/// Plugins that read only their own field group and never fail
macro_rules! field_group_plugin {
    ($($plugin:ident => $name:literal, $field:ident, $module:ident;)*) => {
        $(
            pub struct $plugin;

            impl Plugin for $plugin {
                const NAME: &'static str = $name;

                fn apply<T: Transformable>(
                    asset: &mut T,
                    options: &ImageOptions,
                ) -> Result<(), LoaderError> {
                    $module::apply(asset, &options.$field);
                    Ok(())
                }
            }
        )*
    };
}

field_group_plugin! {
    DefaultImagePlugin => "default_image", default_image, default_image;
    EnhancePlugin => "enhance", enhance, enhance;
    ExtractPlugin => "extract", extract, extract;
    OverlaysPlugin => "overlays", overlays, overlays;
    RecolorPlugin => "recolor", recolor, recolor;
    ReplacePlugin => "replace", replace, replace;
    ReplaceBackgroundPlugin => "replace_background", replace_background, replace_background;
    RestorePlugin => "restore", restore, restore;
    UnderlaysPlugin => "underlays", underlays, underlays;
    ZoompanPlugin => "zoompan", zoompan, zoompan;
}

pub struct RemovePlugin;

impl Plugin for RemovePlugin {
    const NAME: &'static str = "remove";

    fn apply<T: Transformable>(asset: &mut T, options: &ImageOptions) -> Result<(), LoaderError> {
        remove::apply(asset, &options.remove)
    }
}

/// Needs the top-level dimensions as well as its own fields
pub struct FillBackgroundPlugin;

impl Plugin for FillBackgroundPlugin {
    const NAME: &'static str = "fill_background";

    fn apply<T: Transformable>(asset: &mut T, options: &ImageOptions) -> Result<(), LoaderError> {
        let aspect_ratio = options.aspect_ratio();
        fill_background::apply(asset, &options.fill_background, aspect_ratio.as_deref());
        Ok(())
    }
}
