use std::panic;
use leptos::logging::error;

/// Sets up a panic hook that forwards to `console_error_panic_hook` and adds
/// context for the panics this client is most likely to hit.
pub fn set_custom_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        console_error_panic_hook::hook(panic_info);

        let message = panic_message(panic_info.payload());

        // The controller keeps its state in a RefCell; a subscriber that calls
        // back into it while a snapshot is being published trips this.
        if message.contains("already borrowed") || message.contains("already mutably borrowed") {
            error!("[PANIC] Client state was borrowed re-entrantly.");
            error!("[PANIC] A state subscriber or effect probably called a controller method synchronously;");
            error!("[PANIC] dispatch it with `app::dispatch` instead.");
        }
    }));
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    }
}

/// Call once before mounting the app.
pub fn init() {
    set_custom_panic_hook();
    leptos::logging::log!("[PANIC_HOOK] Custom panic hook set up");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_string_payloads() {
        let owned: Box<dyn std::any::Any + Send> = Box::new(String::from("already borrowed: BorrowMutError"));
        assert_eq!(panic_message(owned.as_ref()), "already borrowed: BorrowMutError");

        let borrowed: Box<dyn std::any::Any + Send> = Box::new("boom");
        assert_eq!(panic_message(borrowed.as_ref()), "boom");

        let other: Box<dyn std::any::Any + Send> = Box::new(7_u8);
        assert_eq!(panic_message(other.as_ref()), "Unknown panic");
    }
}
