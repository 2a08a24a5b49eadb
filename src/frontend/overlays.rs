use serde_json::json;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{window, Event, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use super::{listen, query_all};
use crate::{
    error::InteractionError,
    lightbox::{GalleryImage, ImageLightbox},
    modal::{ProjectLink, ProjectModal, SkillModal},
    overlay::{OverlayAction, OverlayKey, OverlayKind, OverlayState},
    telemetry::{log_event, LogLevel},
};

#[derive(Clone)]
struct OverlayStore {
    state: OverlayState,
    log_level: LogLevel,
}

impl Reducible for OverlayStore {
    type Action = OverlayAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let requested = format!("{action:?}");

        let Err(err) = next.state.apply(action) else {
            return next.into();
        };

        let (level, event) = match err {
            InteractionError::OverlayBusy { .. } => (LogLevel::Info, "overlay_open_rejected"),
            InteractionError::UnknownProject(_) => (LogLevel::Info, "project_not_found"),
            _ => (LogLevel::Debug, "overlay_action_ignored"),
        };
        log_event(
            self.log_level,
            level,
            event,
            json!({
                "action": requested,
                "error_class": err.as_str(),
                "error": err.to_string(),
            }),
        );
        self
    }
}

type Dispatcher = UseReducerDispatcher<OverlayStore>;

fn install_triggers(dispatcher: &Dispatcher) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    for card in query_all(&document, "[data-project]") {
        let Some(id) = card.get_attribute("data-project") else {
            continue;
        };
        let dispatcher = dispatcher.clone();
        listen(&card, "click", move |_| {
            dispatcher.dispatch(OverlayAction::OpenProject(id.clone()));
        });
    }

    for tag in query_all(&document, ".skill-tag") {
        let name = tag
            .get_attribute("data-skill")
            .or_else(|| tag.text_content())
            .map(|name| name.trim().to_string())
            .unwrap_or_default();
        let dispatcher = dispatcher.clone();
        listen(&tag, "click", move |_| {
            dispatcher.dispatch(OverlayAction::OpenSkill(name.clone()));
        });
    }

    for (index, item) in query_all(&document, "[data-image]").into_iter().enumerate() {
        let dispatcher = dispatcher.clone();
        listen(&item, "click", move |_| {
            dispatcher.dispatch(OverlayAction::OpenImage(index));
        });
    }

    let dispatcher = dispatcher.clone();
    listen(&document, "keydown", move |event: Event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };

        let key = OverlayKey::from_key(&event.key());
        if key != OverlayKey::Other {
            dispatcher.dispatch(OverlayAction::Key(key));
        }
    });
}

fn dispatch_on_click(dispatcher: &Dispatcher, action: OverlayAction) -> Callback<MouseEvent> {
    let dispatcher = dispatcher.clone();
    Callback::from(move |_: MouseEvent| dispatcher.dispatch(action.clone()))
}

fn project_link(link: Option<ProjectLink>) -> Html {
    let Some(link) = link else {
        return html! {};
    };

    html! {
        <a
            class={classes!("modal-link", link.kind.is_source().then_some("source-link"))}
            href={link.href}
            target="_blank"
            rel="noopener noreferrer"
        >
            <i class={link.kind.icon()} aria-hidden="true"></i>
            {" "}
            {link.kind.label()}
        </a>
    }
}

fn project_modal(modal: &ProjectModal, on_close: Callback<MouseEvent>) -> Html {
    let open = modal.is_open();

    html! {
        <div
            id={OverlayKind::ProjectModal.element_id()}
            class={classes!("modal", open.then_some("active"))}
            aria-hidden={(!open).to_string()}
        >
            <div class="modal-overlay" onclick={on_close.clone()}></div>
            <div class="modal-content" role="dialog" aria-modal="true">
                <button class="modal-close" type="button" aria-label="Close project details" onclick={on_close}>
                    {"×"}
                </button>
                if let Some(entry) = modal.entry() {
                    <>
                        <span class="modal-tag">{entry.tag}</span>
                        <h2 class="modal-title">{entry.title}</h2>
                        <p class="modal-description">{entry.description}</p>
                        <h3>{"Key Features"}</h3>
                        <ul class="modal-features">
                            { for entry.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                        </ul>
                        <h3>{"Technologies"}</h3>
                        <div class="modal-tech">
                            { for entry.technologies.iter().map(|tech| html! { <span class="tech-badge">{*tech}</span> }) }
                        </div>
                        <h3>{"Challenges & Solutions"}</h3>
                        <p class="modal-challenge">{entry.challenge}</p>
                        { project_link(modal.link()) }
                    </>
                }
            </div>
        </div>
    }
}

fn skill_modal(modal: &SkillModal, on_close: Callback<MouseEvent>) -> Html {
    let open = modal.is_open();

    html! {
        <div
            id={OverlayKind::SkillModal.element_id()}
            class={classes!("modal", open.then_some("active"))}
            aria-hidden={(!open).to_string()}
        >
            <div class="modal-overlay" onclick={on_close.clone()}></div>
            <div class="modal-content skill-modal-content" role="dialog" aria-modal="true">
                <button class="modal-close" type="button" aria-label="Close skill details" onclick={on_close}>
                    {"×"}
                </button>
                if let Some(details) = modal.details() {
                    <>
                        <h2 class="modal-title">{details.name.clone()}</h2>
                        <p class="modal-description">{details.description}</p>
                    </>
                }
            </div>
        </div>
    }
}

fn image_lightbox(lightbox: &ImageLightbox, dispatcher: &Dispatcher) -> Html {
    let open = lightbox.is_open();
    let on_close = dispatch_on_click(dispatcher, OverlayAction::Close(OverlayKind::Lightbox));

    html! {
        <div
            id={OverlayKind::Lightbox.element_id()}
            class={classes!("lightbox", open.then_some("active"))}
            aria-hidden={(!open).to_string()}
        >
            <div class="lightbox-backdrop" onclick={on_close.clone()}></div>
            <button class="lightbox-close" type="button" aria-label="Close image" onclick={on_close}>
                {"×"}
            </button>
            <button
                class="lightbox-prev"
                type="button"
                aria-label="Previous image"
                onclick={dispatch_on_click(dispatcher, OverlayAction::PrevImage)}
            >
                {"‹"}
            </button>
            if let Some(image) = lightbox.current_image() {
                <img class="lightbox-image" src={image.src.clone()} alt={image.alt.clone()} />
            }
            <button
                class="lightbox-next"
                type="button"
                aria-label="Next image"
                onclick={dispatch_on_click(dispatcher, OverlayAction::NextImage)}
            >
                {"›"}
            </button>
            <div class="lightbox-counter">{lightbox.position_label().unwrap_or_default()}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct OverlayRootProps {
    pub images: Vec<GalleryImage>,
    pub log_level: LogLevel,
}

#[function_component(OverlayRoot)]
pub fn overlay_root(props: &OverlayRootProps) -> Html {
    let store = {
        let images = props.images.clone();
        let log_level = props.log_level;
        use_reducer(move || OverlayStore {
            state: OverlayState::new(images),
            log_level,
        })
    };
    let dispatcher = store.dispatcher();

    {
        let dispatcher = dispatcher.clone();
        use_effect_with((), move |_| {
            install_triggers(&dispatcher);
            || ()
        });
    }

    use_effect_with(store.state.lock().body_overflow(), |overflow| {
        if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.style().set_property("overflow", overflow);
        }
        || ()
    });

    html! {
        <>
            { project_modal(
                &store.state.project,
                dispatch_on_click(&dispatcher, OverlayAction::Close(OverlayKind::ProjectModal)),
            ) }
            { skill_modal(
                &store.state.skill,
                dispatch_on_click(&dispatcher, OverlayAction::Close(OverlayKind::SkillModal)),
            ) }
            { image_lightbox(&store.state.lightbox, &dispatcher) }
        </>
    }
}
