//! Staggered entrance animation for the analyzer cards

use crate::dom;
use js_sys::Reflect;
use riskmirror_core::{CardStyle, StaggerSchedule};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, HtmlElement};

fn apply_style(style: &CssStyleDeclaration, card: &CardStyle) -> Result<(), JsValue> {
    for (property, value) in card.declarations() {
        style.set_property(property, &value)?;
    }
    Ok(())
}

/// Hide every card matching `selector` and schedule its reveal.
///
/// Returns the number of cards scheduled.
pub fn animate_cards(
    document: &Document,
    selector: &str,
    schedule: &StaggerSchedule,
) -> Result<u32, JsValue> {
    let window = web_sys::window().ok_or("No window")?;
    let cards = document.query_selector_all(selector)?;
    let initial = schedule.initial_style();

    let mut scheduled = 0;
    for index in 0..cards.length() {
        let Some(card) = cards
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };

        let style = card.style();
        apply_style(&style, &initial)?;

        let settled = schedule.final_style();
        let reveal = Closure::once_into_js(move || {
            if let Err(e) = apply_style(&style, &settled) {
                web_sys::console::error_1(&e);
            }
        });
        let delay = i32::try_from(schedule.delay_for(index as usize)).unwrap_or(i32::MAX);
        window.set_timeout_with_callback_and_timeout_and_arguments_0(
            reveal.unchecked_ref(),
            delay,
        )?;
        scheduled += 1;
    }
    Ok(scheduled)
}

/// Run [`animate_cards`] now if the DOM is parsed, otherwise on `DOMContentLoaded`
pub fn animate_when_ready(selector: &str, schedule: &StaggerSchedule) -> Result<(), JsValue> {
    let document = dom::document().map_err(dom::to_js)?;
    let ready_state = Reflect::get(&document, &"readyState".into())?
        .as_string()
        .unwrap_or_default();

    if ready_state != "loading" {
        animate_cards(&document, selector, schedule)?;
        return Ok(());
    }

    let selector = selector.to_string();
    let schedule = schedule.clone();
    let on_ready = Closure::once_into_js(move || {
        let result = dom::document()
            .map_err(dom::to_js)
            .and_then(|document| animate_cards(&document, &selector, &schedule));
        if let Err(e) = result {
            web_sys::console::error_1(&e);
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    Ok(())
}
