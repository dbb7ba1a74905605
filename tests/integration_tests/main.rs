mod bbox_sampling;
mod center_json;
#[cfg(not(target_arch = "wasm32"))]
mod cmdline;
mod convert_svg;
