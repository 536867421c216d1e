use yew::prelude::*;
use web_sys::{window, Element, HtmlInputElement, HtmlTextAreaElement};
use gloo_timers::callback::Timeout;
use log::{error, info};

use crate::config;
use crate::transport::GlooTransport;
use crate::wizard::feedback::{Expiries, BANNER_MESSAGE};
use crate::wizard::form::{StepDefinition, CONFIRMATION_FIELD, HONEYPOT_FIELD, OTHER_DETAIL_FIELD};
use crate::wizard::summary::label_for;
use crate::wizard::{
    submit, FieldKind, FormDefinition, FormField, NavAction, NavOutcome, ProgressBoard,
    SubmissionStatus, SubmitError, WizardController,
};

pub enum FormWizardMsg {
    Navigate(NavAction, u8),
    Input(&'static str, String),
    Select(&'static str, &'static str),
    Check(&'static str, &'static str, bool),
    BannerExpired(u64),
    FlashExpired(&'static str, u64),
    Submit,
    Submitted(Result<(), SubmitError>),
}

pub struct FormWizard {
    controller: WizardController<ProgressBoard>,
    container: NodeRef,
}

fn prompt_for(name: &str) -> &str {
    match name {
        OTHER_DETAIL_FIELD => "Especifique otra área",
        CONFIRMATION_FIELD => "Confirmo que la información proporcionada es correcta",
        other => label_for(other),
    }
}

fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

impl FormWizard {
    fn schedule_expiries(ctx: &Context<Self>, expiries: Expiries) {
        let link = ctx.link().clone();
        let banner = expiries.banner;
        Timeout::new(config::FEEDBACK_DURATION_MS, move || {
            link.send_message(FormWizardMsg::BannerExpired(banner));
        })
        .forget();

        for (group, id) in expiries.groups {
            let link = ctx.link().clone();
            Timeout::new(config::FEEDBACK_DURATION_MS, move || {
                link.send_message(FormWizardMsg::FlashExpired(group, id));
            })
            .forget();
        }
    }

    fn view_field(&self, ctx: &Context<Self>, field: &FormField) -> Html {
        if !field.visible {
            return html! {};
        }
        let name = field.name;
        let values = self.controller.values();
        let feedback = self.controller.feedback();
        let required = if field.required {
            html! { <span class="required">{" *"}</span> }
        } else {
            html! {}
        };

        match field.kind {
            FieldKind::Text(input_type) => {
                let oninput = ctx.link().callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    FormWizardMsg::Input(name, input.value())
                });
                html! {
                    <div class="form-group">
                        <label for={name}>{prompt_for(name)}{required}</label>
                        <input
                            type={input_type}
                            id={name}
                            name={name}
                            class={classes!(feedback.is_field_flagged(name).then_some("error"))}
                            value={values.get(name).unwrap_or_default().to_string()}
                            oninput={oninput}
                        />
                    </div>
                }
            }
            FieldKind::Textarea => {
                let oninput = ctx.link().callback(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    FormWizardMsg::Input(name, input.value())
                });
                html! {
                    <div class="form-group">
                        <label for={name}>{prompt_for(name)}{required}</label>
                        <textarea
                            id={name}
                            name={name}
                            rows="4"
                            class={classes!(feedback.is_field_flagged(name).then_some("error"))}
                            value={values.get(name).unwrap_or_default().to_string()}
                            oninput={oninput}
                        />
                    </div>
                }
            }
            FieldKind::RadioGroup(options) => html! {
                <fieldset class="form-group radio-group">
                    <legend class={classes!(feedback.is_group_flashing(name).then_some("error"))}>
                        {prompt_for(name)}{required}
                    </legend>
                    { for options.iter().map(|&option| {
                        let onchange = ctx.link().callback(move |_: Event| FormWizardMsg::Select(name, option));
                        html! {
                            <label class="radio-option">
                                <input
                                    type="radio"
                                    name={name}
                                    value={option}
                                    checked={values.is_checked(name, option)}
                                    onchange={onchange}
                                />
                                {option}
                            </label>
                        }
                    }) }
                </fieldset>
            },
            FieldKind::Checkbox(options) => {
                let single = options.len() == 1;
                html! {
                    <fieldset class="form-group checkbox-group">
                        if !single {
                            <legend>{prompt_for(name)}{required.clone()}</legend>
                        }
                        { for options.iter().map(|&option| {
                            let onchange = ctx.link().callback(move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                FormWizardMsg::Check(name, option, input.checked())
                            });
                            let text = if single { prompt_for(name) } else { option };
                            html! {
                                <label class="checkbox-option">
                                    <input
                                        type="checkbox"
                                        name={name}
                                        value={option}
                                        checked={values.is_checked(name, option)}
                                        onchange={onchange}
                                    />
                                    {text}
                                </label>
                            }
                        }) }
                    </fieldset>
                }
            }
        }
    }

    fn view_summary(&self) -> Html {
        let entries = self.controller.view().summary();
        html! {
            <div class="form-summary">
                <h4>{"Revise su información"}</h4>
                <dl>
                    { for entries.iter().map(|entry| html! {
                        <div class="summary-item">
                            <dt>{&entry.label}</dt>
                            <dd>{&entry.value}</dd>
                        </div>
                    }) }
                </dl>
            </div>
        }
    }

    fn view_step(&self, ctx: &Context<Self>, definition: &StepDefinition) -> Html {
        let step = definition.step;
        let n = step.number();
        let status = self.controller.view().status(step);
        let sending = self.controller.submission() == SubmissionStatus::Sending;

        let on_prev = ctx.link().callback(move |_: MouseEvent| FormWizardMsg::Navigate(NavAction::Prev, n));
        let on_next = ctx.link().callback(move |_: MouseEvent| FormWizardMsg::Navigate(NavAction::Next, n));

        html! {
            <div
                class={classes!(
                    "form-step",
                    status.active.then_some("active"),
                    status.completed.then_some("completed"),
                )}
                data-step={n.to_string()}
            >
                <h3>{definition.title}</h3>
                if step.is_terminal() {
                    { self.view_summary() }
                }
                { for definition.fields.iter().map(|field| self.view_field(ctx, field)) }
                if self.controller.feedback().banner_for(step).is_some() {
                    <div class="form-error-banner">{BANNER_MESSAGE}</div>
                }
                <div class="form-navigation">
                    if step.prev().is_some() {
                        <button type="button" class="btn-prev" data-action="prev" onclick={on_prev}>
                            {"Anterior"}
                        </button>
                    }
                    if step.is_terminal() {
                        <button type="submit" class="btn-submit" disabled={sending}>
                            { if sending { "Enviando..." } else { "Enviar" } }
                        </button>
                    } else {
                        <button type="button" class="btn-next" data-action="next" onclick={on_next}>
                            {"Siguiente"}
                        </button>
                    }
                </div>
            </div>
        }
    }
}

impl Component for FormWizard {
    type Message = FormWizardMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            controller: WizardController::new(
                FormDefinition::diagnostic(),
                config::FORM_NAME,
                ProgressBoard::default(),
            ),
            container: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            FormWizardMsg::Navigate(action, step) => match self.controller.dispatch(action, step) {
                NavOutcome::Moved { .. } => true,
                NavOutcome::Blocked { expiries, .. } => {
                    Self::schedule_expiries(ctx, expiries);
                    true
                }
                NavOutcome::Ignored => false,
            },
            FormWizardMsg::Input(name, value) => {
                self.controller.input(name, value);
                true
            }
            FormWizardMsg::Select(name, option) => {
                self.controller.select(name, option);
                true
            }
            FormWizardMsg::Check(name, option, checked) => {
                self.controller.check(name, option, checked);
                true
            }
            FormWizardMsg::BannerExpired(id) => {
                self.controller.feedback_mut().expire_banner(id);
                true
            }
            FormWizardMsg::FlashExpired(group, id) => {
                self.controller.feedback_mut().expire_group(group, id);
                true
            }
            FormWizardMsg::Submit => {
                let Some(values) = self.controller.begin_submission() else {
                    return false;
                };
                ctx.link().send_future(async move {
                    let transport = GlooTransport::new(config::get_submit_url(), config::SUBMIT_TIMEOUT_MS);
                    FormWizardMsg::Submitted(submit(&values, &transport).await)
                });
                true
            }
            FormWizardMsg::Submitted(result) => {
                self.controller.finish_submission(&result);
                match result {
                    Ok(()) => info!("Diagnostic form submitted"),
                    Err(SubmitError::NotConfirmed) => alert(SubmitError::NotConfirmed.user_message()),
                    Err(e) => {
                        error!("Form submission failed: {}", e);
                        alert(e.user_message());
                    }
                }
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if self.controller.view_mut().take_reveal() {
            if let Some(container) = self.container.cast::<Element>() {
                container.scroll_into_view();
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let sent = self.controller.submission() == SubmissionStatus::Sent;
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            FormWizardMsg::Submit
        });
        let on_honeypot = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            FormWizardMsg::Input(HONEYPOT_FIELD, input.value())
        });
        let steps = &self.controller.form().steps;

        html! {
            <div class="form-container" ref={self.container.clone()}>
                <style>
                {r#".form-step { display: none; }
                .form-step.active { display: block; }
                .form-progress { display: flex; gap: 0.5rem; margin-bottom: 2rem; }
                .progress-step { flex: 1; height: 4px; background: #d8e0e4; transition: background 0.3s ease; }
                .progress-step.active, .progress-step.completed { background: #1a3a4a; }
                .form-group { margin-bottom: 1.25rem; border: none; padding: 0; }
                .form-group input.error, .form-group textarea.error { border-color: #c0392b; }
                .radio-group legend.error { color: #c0392b; }
                .form-error-banner {
                    background: rgba(192, 57, 43, 0.08);
                    color: #c0392b;
                    padding: 0.75rem 1rem;
                    margin: 1rem 0;
                    border-left: 3px solid #c0392b;
                }
                .hidden-field { display: none; }
                .summary-item { display: flex; gap: 1rem; padding: 0.5rem 0; border-bottom: 1px solid #e4e9ec; }
                .summary-item dt { font-weight: 600; min-width: 40%; color: #1a3a4a; }
                .form-success { text-align: center; padding: 3rem 1rem; }"#}
                </style>
                if sent {
                    <div class="form-success">
                        <h3>{"¡Gracias!"}</h3>
                        <p>{"Hemos recibido su información. Nos pondremos en contacto pronto."}</p>
                    </div>
                } else {
                    <div class="form-progress">
                        { for steps.iter().map(|definition| {
                            let status = self.controller.view().status(definition.step);
                            html! {
                                <div
                                    class={classes!(
                                        "progress-step",
                                        status.active.then_some("active"),
                                        status.completed.then_some("completed"),
                                    )}
                                    data-step={definition.step.to_string()}
                                    title={definition.title}
                                />
                            }
                        }) }
                    </div>
                    <form id="diagnostic-form" name={config::FORM_NAME} onsubmit={onsubmit}>
                        <input type="hidden" name="form-name" value={config::FORM_NAME} />
                        <p class="hidden-field">
                            <label>
                                {"No completar: "}
                                <input
                                    name={HONEYPOT_FIELD}
                                    value={self.controller.values().get(HONEYPOT_FIELD).unwrap_or_default().to_string()}
                                    oninput={on_honeypot}
                                />
                            </label>
                        </p>
                        { for steps.iter().map(|definition| self.view_step(ctx, definition)) }
                    </form>
                }
            </div>
        }
    }
}
