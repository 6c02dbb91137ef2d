//! Replaces `window.fetch` with a scripted fake so the page can be driven
//! without a running Review API. Unscripted requests get `200 []`.
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = r#"
export function install_fetch_mock() {
    window.__fetchCalls = [];
    window.__fetchRoutes = {};
    window.fetch = async function(input, init) {
        const request = input instanceof Request ? input : new Request(input, init);
        const hasBody = request.method !== 'GET' && request.method !== 'HEAD';
        const body = hasBody ? await request.clone().text() : null;
        const path = new URL(request.url).pathname;
        window.__fetchCalls.push({
            method: request.method,
            path: path,
            auth: request.headers.get('Authorization'),
            body: body
        });
        console.log("[MOCK FETCH]", request.method, path);
        const route = window.__fetchRoutes[request.method + ' ' + path] || { status: 200, body: '[]' };
        return new Response(route.body, {
            status: route.status,
            headers: { 'Content-Type': 'application/json' }
        });
    };
    return true;
}

export function set_fetch_response(method, path, status, body) {
    window.__fetchRoutes[method + ' ' + path] = { status: status, body: body };
}

export function fetch_call_count() {
    return (window.__fetchCalls || []).length;
}

export function fetch_call_json(index) {
    return JSON.stringify(window.__fetchCalls[index]);
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = install_fetch_mock)]
    fn _install_fetch_mock() -> bool;

    #[wasm_bindgen(js_name = set_fetch_response)]
    fn _set_fetch_response(method: &str, path: &str, status: u16, body: &str);

    #[wasm_bindgen(js_name = fetch_call_count)]
    fn _fetch_call_count() -> usize;

    #[wasm_bindgen(js_name = fetch_call_json)]
    fn _fetch_call_json(index: usize) -> String;
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub auth: Option<String>,
    pub body: Option<String>,
}

/// Installs the fake and forgets previously recorded calls and routes.
pub fn install_fetch_mock() -> bool {
    _install_fetch_mock()
}

/// Scripts the response for `method path`.
pub fn set_fetch_response(method: &str, path: &str, status: u16, body: &str) {
    _set_fetch_response(method, path, status, body)
}

pub fn recorded_requests() -> Vec<RecordedRequest> {
    (0.._fetch_call_count())
        .map(|index| serde_json::from_str(&_fetch_call_json(index)).unwrap())
        .collect()
}
