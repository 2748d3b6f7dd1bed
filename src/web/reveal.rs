//! Scroll-reveal groups handed to the page's global reveal library, if any.

use js_sys::{Function, Reflect};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::{WebResult, describe};
use crate::config::RevealConfig;
use crate::reveal::{RevealEngine, RevealError, RevealOptions, apply_reveals, resolve_engine};

/// A reveal instance created by calling the library's global factory.
struct GlobalRevealEngine {
    name: String,
    instance: JsValue,
    reveal: Function,
}

impl RevealEngine for GlobalRevealEngine {
    fn name(&self) -> &str {
        &self.name
    }

    fn reveal(&self, selector: &str, options: &RevealOptions) -> Result<(), RevealError> {
        let js_options = js_sys::JSON::parse(&options.to_json()?)
            .map_err(|e| RevealError::Engine(describe(&e)))?;
        self.reveal
            .call2(&self.instance, &JsValue::from_str(selector), &js_options)
            .map_err(|e| RevealError::Engine(describe(&e)))?;
        Ok(())
    }
}

/// Look up `library` as a global function and create an instance.
fn lookup(library: &str) -> Option<Box<dyn RevealEngine>> {
    let factory = Reflect::get(&js_sys::global(), &JsValue::from_str(library))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    let instance = match factory.call0(&JsValue::UNDEFINED) {
        Ok(instance) => instance,
        Err(e) => {
            warn!(library, "reveal library failed to start: {}", describe(&e));
            return None;
        }
    };
    let reveal = Reflect::get(&instance, &JsValue::from_str("reveal"))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    let engine: Box<dyn RevealEngine> = Box::new(GlobalRevealEngine {
        name: library.to_string(),
        instance,
        reveal,
    });
    Some(engine)
}

pub(super) fn bind(config: &RevealConfig) -> WebResult<()> {
    if !config.enabled {
        debug!("reveal animations disabled by config");
        return Ok(());
    }
    let engine = resolve_engine(lookup(&config.library));
    let applied = apply_reveals(engine.as_ref(), &config.defaults, &config.groups);
    debug!(applied, engine = engine.name(), "reveal groups registered");
    Ok(())
}
