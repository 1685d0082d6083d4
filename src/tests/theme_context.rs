use std::cell::{ Cell, RefCell };
use dioxus::prelude::*;
use dioxus::dioxus_core::{ NoOpMutations, VirtualDom };
use super::common::setup;
use crate::utils::{
    use_theme,
    use_theme_provider_with,
    FixedSignal,
    MemoryStorage,
    ThemeState,
    ThemeStore,
};
use crate::views::Home;

thread_local! {
    static INITS: Cell<usize> = Cell::new(0);
    static SEEN: RefCell<Vec<ThemeState>> = RefCell::new(Vec::new());
    static STORE: Cell<Option<Signal<ThemeStore>>> = Cell::new(None);
}

fn memory_store(system: Option<ThemeState>) -> ThemeStore {
    ThemeStore::initialize("portfolio-theme", Box::new(MemoryStorage::new()), &FixedSignal(system))
}

fn reset() {
    INITS.with(|inits| inits.set(0));
    SEEN.with(|seen| seen.borrow_mut().clear());
    STORE.with(|store| store.set(None));
}

fn seen() -> Vec<ThemeState> {
    SEEN.with(|seen| seen.borrow().clone())
}

#[component]
fn Root() -> Element {
    let (store, theme) = use_theme_provider_with(|| {
        INITS.with(|inits| inits.set(inits.get() + 1));
        memory_store(None)
    });
    STORE.with(|cell| cell.set(Some(store)));

    rsx! {
        div { class: theme().css_class(), Reader {} }
    }
}

#[component]
fn Reader() -> Element {
    let theme = use_theme();
    SEEN.with(|seen| seen.borrow_mut().push(theme()));

    rsx! {
        span { "{theme()}" }
    }
}

fn toggle_and_render(dom: &mut VirtualDom) {
    dom.in_runtime(|| {
        if let Some(mut store) = STORE.with(|cell| cell.get()) {
            store.write().toggle();
        }
    });
    dom.render_immediate(&mut NoOpMutations);
}

#[test]
fn test_toggle_rerenders_theme_consumers() {
    setup();
    reset();
    let mut dom = VirtualDom::new(Root);
    dom.rebuild_in_place();
    assert_eq!(seen(), vec![ThemeState::Light]);

    toggle_and_render(&mut dom);
    assert_eq!(seen(), vec![ThemeState::Light, ThemeState::Dark]);

    toggle_and_render(&mut dom);
    assert_eq!(seen(), vec![ThemeState::Light, ThemeState::Dark, ThemeState::Light]);
}

#[test]
fn test_provider_builds_store_once_across_rerenders() {
    setup();
    reset();
    let mut dom = VirtualDom::new(Root);
    dom.rebuild_in_place();
    for _ in 0..3 {
        toggle_and_render(&mut dom);
    }

    assert_eq!(INITS.with(|inits| inits.get()), 1);
    let store = STORE.with(|cell| cell.get());
    let subscribers = dom.in_runtime(|| store.map(|store| store.peek().subscriber_count()));
    assert_eq!(subscribers, Some(1));
}

#[component]
fn Page() -> Element {
    let (store, _) = use_theme_provider_with(|| memory_store(Some(ThemeState::Dark)));
    STORE.with(|cell| cell.set(Some(store)));
    rsx! { Home {} }
}

#[test]
fn test_full_page_renders_and_toggles() {
    setup();
    reset();
    let mut dom = VirtualDom::new(Page);
    dom.rebuild_in_place();

    let current = || STORE.with(|cell| cell.get()).map(|store| store.peek().theme());
    assert_eq!(dom.in_runtime(current), Some(ThemeState::Dark));

    toggle_and_render(&mut dom);
    assert_eq!(dom.in_runtime(current), Some(ThemeState::Light));
}
