//! Browser smoke tests. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use matrix_rain::MatrixRain;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn mount(id: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    let host = document.create_element("main").unwrap();
    host.set_id(id);
    host.dyn_ref::<HtmlElement>()
        .unwrap()
        .style()
        .set_property("font-size", "16px")
        .unwrap();
    document.body().unwrap().append_child(&host).unwrap();
}

#[wasm_bindgen_test]
fn builds_columns_in_the_host() {
    mount("rain-build");
    let rain = MatrixRain::new(Some("#rain-build".into())).unwrap();
    let document = web_sys::window().unwrap().document().unwrap();
    let cols = document.query_selector_all("#rain-build > div.col").unwrap();
    assert_eq!(cols.length(), rain.columns());
}

#[wasm_bindgen_test]
fn manual_steps_paint_classes() {
    mount("rain-step");
    let mut rain = MatrixRain::with_config(
        Some("#rain-step".into()),
        r#"{"seed": 5, "drop_chance": 0.0, "clear_chance": 0.0}"#,
    )
    .unwrap();
    if rain.columns() == 0 || rain.rows() < 2 {
        return;
    }
    assert!(rain.add_drop(0, 0));
    assert!(rain.play_next_tick().unwrap());

    let document = web_sys::window().unwrap().document().unwrap();
    let glow = document
        .query_selector("#rain-step [data-col='0'][data-row='0']")
        .unwrap()
        .unwrap();
    assert!(glow.class_list().contains("afterglow"));
    let head = document
        .query_selector("#rain-step [data-col='0'][data-row='1']")
        .unwrap()
        .unwrap();
    assert!(head.class_list().contains("leading-illuminate"));
}

#[wasm_bindgen_test]
fn missing_host_is_an_error() {
    assert!(MatrixRain::new(Some("#does-not-exist".into())).is_err());
}

#[wasm_bindgen_test]
fn play_and_stop_toggle() {
    mount("rain-play");
    let mut rain = MatrixRain::new(Some("#rain-play".into())).unwrap();
    rain.play().unwrap();
    assert!(rain.is_playing());
    assert!(!rain.play_next_tick().unwrap());
    rain.stop();
    assert!(!rain.is_playing());
}
