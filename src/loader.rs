//! Top-level URL construction.

use tracing::debug;

use crate::asset::{ImageAsset, Transformable};
use crate::config::CloudConfig;
use crate::error::LoaderError;
use crate::plugins::{
    DefaultImagePlugin, EnhancePlugin, ExtractPlugin, FillBackgroundPlugin, OverlaysPlugin,
    Plugin, RecolorPlugin, RemovePlugin, ReplaceBackgroundPlugin, ReplacePlugin, RestorePlugin,
    UnderlaysPlugin, ZoompanPlugin,
};
use crate::types::ImageOptions;

/// Build the delivery URL for `options.src` with every plugin applied.
///
/// Plugins run in a fixed order: the generative edits on the original image,
/// then default image, background fill, overlays, underlays and zoompan.
pub fn construct_url(options: &ImageOptions, config: &CloudConfig) -> Result<String, LoaderError> {
    Ok(construct_asset(options, config)?.to_url())
}

/// Like [`construct_url`] but returns the handle for further chaining
pub fn construct_asset(
    options: &ImageOptions,
    config: &CloudConfig,
) -> Result<ImageAsset, LoaderError> {
    if options.src.trim().is_empty() {
        return Err(LoaderError::MissingSource);
    }
    config.validate()?;

    let mut asset = ImageAsset::new(options.src.as_str(), config);
    run::<EnhancePlugin, _>(&mut asset, options)?;
    run::<ExtractPlugin, _>(&mut asset, options)?;
    run::<RecolorPlugin, _>(&mut asset, options)?;
    run::<RemovePlugin, _>(&mut asset, options)?;
    run::<ReplacePlugin, _>(&mut asset, options)?;
    run::<ReplaceBackgroundPlugin, _>(&mut asset, options)?;
    run::<RestorePlugin, _>(&mut asset, options)?;
    run::<DefaultImagePlugin, _>(&mut asset, options)?;
    run::<FillBackgroundPlugin, _>(&mut asset, options)?;
    run::<OverlaysPlugin, _>(&mut asset, options)?;
    run::<UnderlaysPlugin, _>(&mut asset, options)?;
    run::<ZoompanPlugin, _>(&mut asset, options)?;

    Ok(asset)
}

fn run<P: Plugin, T: Transformable>(
    asset: &mut T,
    options: &ImageOptions,
) -> Result<(), LoaderError> {
    let before = asset.transformations().len();
    P::apply(asset, options)?;
    debug!(
        plugin = P::NAME,
        added = asset.transformations().len() - before,
        "Applied plugin"
    );
    Ok(())
}
