use gloo_timers::future::TimeoutFuture;
use log::{debug, error, info, warn};
use web_sys::{Element, HtmlInputElement};
use yew::{html::Scope, prelude::*};

use crate::{
    auth::{self, AuthError, PendingSubmit, SubmitPhase, CONNECTED_MESSAGE},
    component::*,
    config::AuthConfig,
    storage::BrowserStore,
};

pub struct LoginPage {
    config: AuthConfig,
    durable: BrowserStore,
    session: BrowserStore,

    // node
    card: NodeRef,
    project_url_input: NodeRef,
    api_key_input: NodeRef,
    save_locally_input: NodeRef,

    // data
    saved_url: Option<String>,

    // status
    visibility: KeyVisibility,
    phase: SubmitPhase,
    status: StatusBoard,
}

pub enum LoginPageMsg {
    ToggleKeyVisibility,
    Submit,
    AuthDelayElapsed { pending: PendingSubmit },
}

impl LoginPage {
    fn read_form(&self) -> Option<(String, String, bool)> {
        let url = self.project_url_input.cast::<HtmlInputElement>()?;
        let key = self.api_key_input.cast::<HtmlInputElement>()?;
        let save_locally = self.save_locally_input.cast::<HtmlInputElement>()?;
        Some((url.value(), key.value(), save_locally.checked()))
    }

    /// Waits out the fake auth round trip. Not cancellable, and a second
    /// submit while waiting just schedules another completion.
    fn simulate_auth(pending: PendingSubmit, delay_ms: u32, link: Scope<Self>) {
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            link.send_message(LoginPageMsg::AuthDelayElapsed { pending });
        });
    }

    fn show_status(&mut self, message: impl Into<String>, kind: StatusKind) {
        if self.status.show(message, kind) {
            self.shake_card();
        }
    }

    fn shake_card(&self) {
        let Some(card) = self.card.cast::<Element>() else {
            warn!("card element not mounted, skip shake");
            return;
        };
        debug!("shake card for error #{}", self.status.shakes());
        if let Err(e) = shake(&card, &self.config) {
            error!("shake animation error: {e}");
        }
    }

    fn reject(&mut self, err: AuthError) {
        if err.is_validation() {
            warn!("submit rejected: {err}");
        } else {
            error!("persist credential error: {err:?}");
        }
        self.show_status(err.to_string(), StatusKind::Error);
    }
}

impl Component for LoginPage {
    type Message = LoginPageMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let durable = BrowserStore::durable();
        let session = BrowserStore::session();

        let saved = match auth::restore_saved(&durable, &session) {
            Ok(saved) => saved,
            Err(err) => {
                error!("restore saved connection error: {err:?}");
                Default::default()
            }
        };
        debug!(
            "saved connection: url={}, api_key={}",
            saved.project_url.is_some(),
            saved.has_api_key
        );

        Self {
            config: AuthConfig::default(),
            durable,
            session,
            card: NodeRef::default(),
            project_url_input: NodeRef::default(),
            api_key_input: NodeRef::default(),
            save_locally_input: NodeRef::default(),
            saved_url: saved.project_url,
            visibility: KeyVisibility::default(),
            phase: SubmitPhase::default(),
            status: StatusBoard::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LoginPageMsg::ToggleKeyVisibility => {
                self.visibility = self.visibility.toggle();
                true
            }
            LoginPageMsg::Submit => {
                let Some((url, api_key, save_locally)) = self.read_form() else {
                    error!("login form inputs not mounted");
                    return false;
                };
                let pending = PendingSubmit::begin(&url, &api_key, save_locally, &self.config);
                self.phase = self.phase.validated(&pending);
                match pending {
                    Ok(pending) => Self::simulate_auth(
                        pending,
                        self.config.auth_delay_ms,
                        ctx.link().clone(),
                    ),
                    Err(err) => self.reject(err),
                }
                true
            }
            LoginPageMsg::AuthDelayElapsed { pending } => {
                let outcome = pending.complete(&self.durable, &self.session);
                self.phase = self.phase.completed(&outcome);
                match outcome {
                    Ok(credential) => {
                        self.show_status(CONNECTED_MESSAGE, StatusKind::Success);
                        info!("App initialized for context: {}", credential.project_url);
                        // dashboard route not built yet, stay on this page
                    }
                    Err(err) => self.reject(err),
                }
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        // the api key input is left empty on purpose
        if let (Some(url), Some(input)) = (
            self.saved_url.take(),
            self.project_url_input.cast::<HtmlInputElement>(),
        ) {
            input.set_value(&url);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_submit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            LoginPageMsg::Submit
        });
        let on_toggle_key = ctx
            .link()
            .callback(|_: MouseEvent| LoginPageMsg::ToggleKeyVisibility);

        let processing = self.phase.is_processing();
        let submit_label = self.phase.submit_label();

        html! {
            <div class="container">
                <div class="card" ref={self.card.clone()}>
                    <h1>{"Kết nối hệ thống"}</h1>
                    <p class="subtitle">{"Nhập URL dự án và API key để tiếp tục."}</p>

                    <form id="supabase-auth-form" onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="projectUrl">{"Project URL"}</label>
                            <input type="text" id="projectUrl" placeholder="https://xyz.supabase.co"
                                autocomplete="url" ref={self.project_url_input.clone()} />
                        </div>

                        <div class="form-group">
                            <label for="apiKey">{"API Key"}</label>
                            <div class="input-with-action">
                                <input type={self.visibility.input_type()} id="apiKey"
                                    autocomplete="off" ref={self.api_key_input.clone()} />
                                <ToggleKeyButton visibility={self.visibility} onclick={on_toggle_key} />
                            </div>
                        </div>

                        <div class="form-group checkbox">
                            <input type="checkbox" id="saveLocally" ref={self.save_locally_input.clone()} />
                            <label for="saveLocally">{"Lưu trên thiết bị này"}</label>
                        </div>

                        <button type="submit" class="btn btn-primary" disabled={processing}>
                            <span>{submit_label}</span>
                        </button>
                    </form>

                    <StatusMessage status={self.status.current().cloned()} />
                </div>
            </div>
        }
    }
}
