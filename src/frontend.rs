mod overlays;

use gloo_timers::callback::Timeout;
use js_sys::{Array, Date, Function, Reflect};
use serde_json::json;
use std::{cell::RefCell, rc::Rc, time::Duration};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Node, ScrollBehavior, ScrollToOptions,
    Storage, Window,
};

use crate::{
    animation::{play, Ticker},
    config::InteractionConfig,
    counter::{CounterAnimation, CounterTarget, StatsTrigger},
    filter::{ProjectFilter, ALL_FILTER},
    lightbox::GalleryImage,
    menu::NavigationMenu,
    reveal::{
        FadeInRevealer, HIDDEN_OPACITY, HIDDEN_TRANSFORM, REVEALED_OPACITY, REVEALED_TRANSFORM,
        REVEAL_TRANSITION,
    },
    scroll::{anchor_target, nav_link_for, ScrollMetrics, ScrollTracker, SectionBounds},
    telemetry::{log_event, LogLevel},
    theme::{PreferenceStore, Theme, ThemeController, THEME_ATTRIBUTE},
    typing::{TypingFrame, TypingReveal},
};
use overlays::{OverlayRoot, OverlayRootProps};

const OVERLAY_MOUNT_ID: &str = "overlayRoot";
const REVEAL_INDEX_ATTRIBUTE: &str = "data-reveal-index";

struct LocalPreferenceStore;

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

impl PreferenceStore for LocalPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

struct TimeoutTicker;

impl Ticker for TimeoutTicker {
    fn schedule(&self, delay: Duration, step: Box<dyn FnOnce()>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, step).forget();
    }
}

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_ok()
    {
        closure.forget();
    }
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn set_class(element: &Element, class: &str, enabled: bool) {
    let _ = element.class_list().toggle_with_force(class, enabled);
}

fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property(property, value);
    }
}

fn config_from_document(document: &Document) -> InteractionConfig {
    let body = document.body();
    InteractionConfig::from_lookup(|key| body.as_ref()?.get_attribute(&format!("data-{key}")))
}

fn apply_theme(theme: Theme) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
        }
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    // The browser runs the update callback later, so it must outlive this call.
    let callback = Closure::once_into_js(move || apply_theme(theme));
    if start_view_transition.call1(&document_js, &callback).is_err() {
        apply_theme(theme);
    }
}

fn install_theme(document: &Document, config: &InteractionConfig) {
    let mut controller = ThemeController::load(LocalPreferenceStore);
    apply_theme(controller.current());

    let Some(toggle) = document.get_element_by_id("themeToggle") else {
        return;
    };
    let _ = toggle.set_attribute("aria-label", &controller.current().toggle_label());

    let log_level = config.log_level;
    let button = toggle.clone();
    listen(&toggle, "click", move |_| {
        let next = controller.toggle();
        apply_theme_with_transition(next);
        let _ = button.set_attribute("aria-label", &next.toggle_label());
        log_event(
            log_level,
            LogLevel::Info,
            "theme_changed",
            json!({ "theme": next.as_str() }),
        );
    });
}

fn render_menu(menu: &Element, toggle: &Element, open: bool) {
    set_class(menu, "active", open);
    set_class(toggle, "active", open);
}

fn install_menu(document: &Document) {
    let (Some(navbar), Some(toggle), Some(menu)) = (
        document.get_element_by_id("navbar"),
        document.get_element_by_id("menuToggle"),
        document.query_selector(".nav-menu").ok().flatten(),
    ) else {
        return;
    };
    let state = Rc::new(RefCell::new(NavigationMenu::default()));

    {
        let state = Rc::clone(&state);
        let (menu, button) = (menu.clone(), toggle.clone());
        listen(&toggle, "click", move |_| {
            state.borrow_mut().toggle();
            render_menu(&menu, &button, state.borrow().is_open());
        });
    }

    for link in query_all(document, ".nav-link") {
        let state = Rc::clone(&state);
        let (menu, button) = (menu.clone(), toggle.clone());
        listen(&link, "click", move |_| {
            state.borrow_mut().on_link_click();
            render_menu(&menu, &button, false);
        });
    }

    listen(document, "click", move |event| {
        let inside_navbar = event
            .target()
            .and_then(|target| target.dyn_into::<Node>().ok())
            .is_some_and(|node| navbar.contains(Some(&node)));

        if state.borrow_mut().on_document_click(inside_navbar) {
            render_menu(&menu, &toggle, false);
        }
    });
}

fn scroll_metrics(win: &Window, document: &Document) -> ScrollMetrics {
    ScrollMetrics {
        scroll_top: win.scroll_y().unwrap_or(0.0),
        viewport_height: win
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0),
        document_height: document
            .document_element()
            .map(|root| f64::from(root.scroll_height()))
            .unwrap_or(0.0),
    }
}

fn install_scroll_tracker(document: &Document, config: &InteractionConfig) {
    let Some(win) = window() else {
        return;
    };

    let sections: Vec<HtmlElement> = query_all(document, "section[id]")
        .into_iter()
        .filter_map(|section| section.dyn_into::<HtmlElement>().ok())
        .collect();
    let nav_links = query_all(document, ".nav-link");
    let navbar = document.get_element_by_id("navbar");
    let progress = document.get_element_by_id("scrollProgress");
    let back_to_top = document.get_element_by_id("backToTop");
    let mut tracker = ScrollTracker::new(config);

    let (doc, scroll_window) = (document.clone(), win.clone());
    listen(&win, "scroll", move |_| {
        let metrics = scroll_metrics(&scroll_window, &doc);
        let bounds: Vec<SectionBounds> = sections
            .iter()
            .map(|section| SectionBounds {
                id: section.id(),
                top: f64::from(section.offset_top()),
                height: f64::from(section.offset_height()),
            })
            .collect();
        let frame = tracker.on_scroll(metrics, &bounds);

        if let Some(navbar) = &navbar {
            set_class(navbar, "scrolled", frame.navbar_scrolled);
        }
        if let Some(progress) = &progress {
            set_style(progress, "width", &format!("{}%", frame.progress_percent));
        }
        if let Some(button) = &back_to_top {
            set_class(button, "visible", frame.back_to_top_visible);
        }

        let Some(active) = frame.active_section.and_then(|index| bounds.get(index)) else {
            return;
        };
        let hrefs: Vec<Option<String>> =
            nav_links.iter().map(|link| link.get_attribute("href")).collect();
        // Without a matching link the previous highlight stays, so one link remains active.
        let Some(selected) = nav_link_for(&active.id, &hrefs) else {
            return;
        };
        for (index, link) in nav_links.iter().enumerate() {
            set_class(link, "active", index == selected);
        }
    });
}

fn scroll_window_to(top: f64) {
    let Some(win) = window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(if prefers_reduced_motion() {
        ScrollBehavior::Instant
    } else {
        ScrollBehavior::Smooth
    });
    win.scroll_to_with_scroll_to_options(&options);
}

fn install_back_to_top(document: &Document) {
    if let Some(button) = document.get_element_by_id("backToTop") {
        listen(&button, "click", |_| scroll_window_to(0.0));
    }
}

fn install_anchor_scroll(document: &Document, config: &InteractionConfig) {
    let anchor_offset = config.anchor_offset;

    for anchor in query_all(document, "a[href^=\"#\"]") {
        let (doc, link) = (document.clone(), anchor.clone());
        listen(&anchor, "click", move |event| {
            event.prevent_default();

            let Some(target) = link
                .get_attribute("href")
                .and_then(|href| doc.query_selector(&href).ok().flatten())
            else {
                return;
            };

            let scroll_top = window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            let element_top = target.get_bounding_client_rect().top();
            scroll_window_to(anchor_target(element_top, scroll_top, anchor_offset));
        });
    }
}

fn intersection_entries(entries: &Array) -> impl Iterator<Item = IntersectionObserverEntry> + '_ {
    entries
        .iter()
        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
}

fn install_reveal(document: &Document, config: &InteractionConfig) {
    let sections = query_all(document, "section");
    let mut revealer = FadeInRevealer::new(config, sections.len());

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(revealer.threshold()));
    options.set_root_margin(revealer.root_margin());

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in intersection_entries(&entries) {
                let target = entry.target();
                let Some(index) = target
                    .get_attribute(REVEAL_INDEX_ATTRIBUTE)
                    .and_then(|value| value.parse::<usize>().ok())
                else {
                    continue;
                };

                if revealer.on_intersection(index, entry.is_intersecting()) {
                    set_style(&target, "opacity", REVEALED_OPACITY);
                    set_style(&target, "transform", REVEALED_TRANSFORM);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    callback.forget();

    for (index, section) in sections.iter().enumerate() {
        set_style(section, "opacity", HIDDEN_OPACITY);
        set_style(section, "transform", HIDDEN_TRANSFORM);
        set_style(section, "transition", REVEAL_TRANSITION);
        let _ = section.set_attribute(REVEAL_INDEX_ATTRIBUTE, &index.to_string());
        observer.observe(section);
    }
}

fn start_counters(counters: &[Element], config: &InteractionConfig) {
    let ticker = Rc::new(TimeoutTicker);
    let frame = Duration::from_millis(config.counter_frame_ms);
    let mut started = 0;

    for counter in counters {
        let Some(raw) = counter.get_attribute("data-target") else {
            continue;
        };

        let target = match CounterTarget::parse(&raw) {
            Ok(target) => target,
            Err(err) => {
                log_event(
                    config.log_level,
                    LogLevel::Debug,
                    "counter_skipped",
                    json!({ "error_class": err.as_str(), "error": err.to_string() }),
                );
                continue;
            }
        };

        let element = counter.clone();
        play(
            Rc::clone(&ticker),
            Duration::ZERO,
            frame,
            CounterAnimation::new(target, config),
            move |text: String| element.set_text_content(Some(&text)),
        );
        started += 1;
    }

    log_event(
        config.log_level,
        LogLevel::Info,
        "counter_started",
        json!({ "counters": started, "duration_ms": config.counter_duration_ms }),
    );
}

fn install_stats_counter(document: &Document, config: &InteractionConfig) {
    let counters = query_all(document, "[data-target]");
    let Some(container) = counters
        .first()
        .and_then(|counter| counter.closest("section").ok().flatten())
    else {
        return;
    };

    let mut trigger = StatsTrigger::new(config);
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(trigger.threshold()));

    let config = config.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in intersection_entries(&entries) {
                if trigger.on_visibility(entry.is_intersecting(), entry.intersection_ratio()) {
                    observer.disconnect();
                    start_counters(&counters, &config);
                }
            }
        },
    );

    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    callback.forget();
    observer.observe(&container);
}

fn install_filter(document: &Document, config: &InteractionConfig) {
    let buttons = Rc::new(query_all(document, ".filter-btn"));
    let items = Rc::new(query_all(document, ".project-item"));
    let filter = Rc::new(RefCell::new(ProjectFilter::default()));

    for (clicked, button) in buttons.iter().enumerate() {
        let tag = button
            .get_attribute("data-filter")
            .unwrap_or_else(|| ALL_FILTER.to_string());
        let (buttons, items, filter) = (Rc::clone(&buttons), Rc::clone(&items), Rc::clone(&filter));
        let log_level = config.log_level;

        listen(button, "click", move |_| {
            for (index, button) in buttons.iter().enumerate() {
                set_class(button, "active", index == clicked);
            }

            let categories: Vec<Option<String>> = items
                .iter()
                .map(|item| item.get_attribute("data-category"))
                .collect();
            let visibility = filter
                .borrow_mut()
                .apply(&tag, categories.iter().map(Option::as_deref));

            let mut shown = 0;
            for (item, visible) in items.iter().zip(visibility) {
                set_class(item, "hidden", !visible);
                shown += usize::from(visible);
            }

            log_event(
                log_level,
                LogLevel::Debug,
                "filter_applied",
                json!({ "filter": filter.borrow().active().as_str(), "shown": shown }),
            );
        });
    }
}

fn restart_blink(cursor: &Element) {
    let Some(cursor) = cursor.dyn_ref::<HtmlElement>() else {
        return;
    };

    let _ = cursor.style().set_property("animation", "none");
    // Reading layout forces a reflow so the animation restarts.
    let _ = cursor.offset_height();
    let _ = cursor.style().set_property("animation", "blink 1s infinite");
}

fn install_typing(document: &Document, config: &InteractionConfig) {
    let Some(target) = document.query_selector(".typing-text").ok().flatten() else {
        return;
    };
    let cursor = document.query_selector(".cursor").ok().flatten();

    play(
        Rc::new(TimeoutTicker),
        Duration::from_millis(config.typing_start_delay_ms),
        Duration::from_millis(config.typing_step_ms),
        TypingReveal::new(&config.typing_text),
        move |frame: TypingFrame| {
            target.set_text_content(Some(&frame.text));
            if frame.complete {
                if let Some(cursor) = &cursor {
                    restart_blink(cursor);
                }
            }
        },
    );
}

fn set_current_year(document: &Document) {
    if let Some(year) = document.get_element_by_id("currentYear") {
        year.set_text_content(Some(&Date::new_0().get_full_year().to_string()));
    }
}

fn gallery_images(document: &Document) -> Vec<GalleryImage> {
    query_all(document, "[data-image]")
        .iter()
        .map(|item| GalleryImage {
            src: item.get_attribute("data-image").unwrap_or_default(),
            alt: item
                .query_selector("img")
                .ok()
                .flatten()
                .and_then(|img| img.get_attribute("alt"))
                .unwrap_or_default(),
        })
        .collect()
}

fn print_greeting() {
    gloo_console::log!(
        "%cHi there! 👋",
        "color: #64ffda; font-size: 20px; font-weight: bold; font-family: monospace;"
    );
    gloo_console::log!(
        "%cWelcome to my portfolio!",
        "color: #8892b0; font-size: 14px; font-family: monospace;"
    );
    gloo_console::log!(
        "%cThanks for checking out my code 🚀",
        "color: #ffd700; font-size: 14px; font-family: monospace;"
    );
    gloo_console::log!(
        "%cConnect with me:\nGitHub: github.com/cebause01\nLinkedIn: linkedin.com/in/zarifhaikalz",
        "color: #64ffda; font-size: 12px; font-family: monospace;"
    );
}

pub fn run() {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let config = config_from_document(&document);

    print_greeting();
    set_current_year(&document);
    install_theme(&document, &config);
    install_menu(&document);
    install_scroll_tracker(&document, &config);
    install_back_to_top(&document);
    install_anchor_scroll(&document, &config);
    install_reveal(&document, &config);
    install_stats_counter(&document, &config);
    install_filter(&document, &config);
    install_typing(&document, &config);

    let Some(root) = document.get_element_by_id(OVERLAY_MOUNT_ID) else {
        log_event(
            config.log_level,
            LogLevel::Info,
            "mount_point_missing",
            json!({ "id": OVERLAY_MOUNT_ID }),
        );
        return;
    };

    yew::Renderer::<OverlayRoot>::with_root_and_props(
        root,
        OverlayRootProps {
            images: gallery_images(&document),
            log_level: config.log_level,
        },
    )
    .render();
}
