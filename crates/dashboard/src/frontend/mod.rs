//! Leptos frontend for the dashboard shell.

pub mod shell;

use leptos::*;
use wasm_bindgen::prelude::*;

use crate::layout::ShellModel;
use shell::Shell;

/// Mount the shell for a model composed by the host page.
///
/// The model is the JSON shape of [`ShellModel`].
#[wasm_bindgen]
pub fn mount_shell(model: JsValue) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let model: ShellModel = serde_wasm_bindgen::from_value(model)?;
    mount_to_body(move || view! { <Shell model=model/> });
    Ok(())
}
