//! Tag cloud engine: input decoding, rendering and atomic output.
mod decode;
mod engine;
mod input;
mod manifest;
mod persist;
mod render;
mod types;

pub use decode::{decode_text, DecodeError, DecodedText};
pub use engine::CloudEngine;
pub use input::{read_input, InputError, InputText};
pub use manifest::{manifest_path_for, Manifest, ManifestWord};
pub use persist::{check_output_dir, write_atomically, PersistError};
pub use render::{
    default_stylesheets, escape_html, CloudRenderer, HtmlCloudRenderer, HOSTED_STYLESHEET,
    LOCAL_STYLESHEET,
};
pub use types::{OutputRequest, RunError, RunReport};
