use leptos::{
    either::{Either, EitherOf3},
    ev::SubmitEvent,
    prelude::*,
};

use super::reveal::{RevealGroup, RevealItem, RevealSection};
use crate::contact::{ButtonLabel, ContactForm, Field, PendingTimer};
use crate::content::{CONTACT_CHANNELS, SOCIAL_LINKS};
use crate::nav::Section;

/// Runs `timer` and whatever step follows it. The stored handle lets the
/// component clear the browser timeout when it unmounts.
fn schedule(
    form: RwSignal<ContactForm>,
    pending: StoredValue<Option<TimeoutHandle>>,
    timer: PendingTimer,
) {
    let handle = set_timeout_with_handle(
        move || {
            // None once the component is gone
            let next = form.try_update(|f| f.fire(timer)).flatten();
            if let Some(next) = next {
                schedule(form, pending, next);
            }
        },
        timer.delay,
    );
    match handle {
        Ok(handle) => {
            pending.try_set_value(Some(handle));
        }
        Err(e) => log::warn!("couldn't schedule contact form timer: {e:?}"),
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let pending = StoredValue::new(None::<TimeoutHandle>);

    on_cleanup(move || {
        if let Some(handle) = pending.try_update_value(|h| h.take()).flatten() {
            handle.clear();
        }
        form.try_update_untracked(|f| f.unmount());
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.try_update(|f| f.submit()) {
            Some(Ok(timer)) => schedule(form, pending, timer),
            Some(Err(e)) => log::info!("contact form not sent: {e}"),
            None => {}
        }
    };

    view! {
        <RevealSection
            section=Section::Contact
            class="section-container bg-muted/30"
            inner_class="space-y-10"
        >
            <div class="text-center space-y-4">
                <RevealItem>
                    <h2 class="section-title">"Get In Touch"</h2>
                </RevealItem>
                <RevealItem>
                    <p class="section-subtitle max-w-2xl mx-auto">
                        "Let's build something awesome together"
                    </p>
                </RevealItem>
            </div>

            <div class="grid lg:grid-cols-2 gap-10">
                <RevealGroup class="space-y-8">
                    <RevealItem>
                        <h3 class="text-2xl font-bold mb-4">"Contact Information"</h3>
                        <p class="text-muted-foreground">
                            "I'm interested in freelance opportunities, especially ambitious or large projects. However, if you have other request or question, don't hesitate to contact me."
                        </p>
                    </RevealItem>

                    <RevealGroup class="space-y-4">
                        {CONTACT_CHANNELS
                            .iter()
                            .map(|channel| {
                                view! {
                                    <RevealItem>
                                        <a
                                            href=channel.href
                                            class="flex items-center gap-4 p-4 rounded-lg border bg-background hover:bg-muted/50 transition-colors"
                                        >
                                            <div class="flex-shrink-0 h-10 w-10 rounded-full bg-primary/10 flex items-center justify-center text-primary">
                                                {channel.icon}
                                            </div>
                                            <span>{channel.label}</span>
                                        </a>
                                    </RevealItem>
                                }
                            })
                            .collect_view()}
                    </RevealGroup>

                    <RevealItem class="pt-4">
                        <h4 class="text-lg font-semibold mb-4">"Connect with me"</h4>
                        <div class="flex gap-3">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="h-10 w-10 rounded-full bg-background border flex items-center justify-center text-muted-foreground hover:text-primary hover:border-primary transition-colors"
                                            aria-label=link.label
                                        >
                                            <i class=link.icon />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </RevealItem>
                </RevealGroup>

                <RevealItem>
                    <div class="bg-background border rounded-xl p-6 shadow-sm">
                        <h3 class="text-2xl font-bold mb-6 flex items-center gap-2">
                            <span class="text-primary">"💬"</span>
                            <span>"Send Me a Message"</span>
                        </h3>
                        <form on:submit=on_submit class="space-y-4">
                            <div class="grid gap-4 sm:grid-cols-2">
                                <DraftInput
                                    form=form
                                    field=Field::Name
                                    label="Name"
                                    placeholder="Your name"
                                />
                                <DraftInput
                                    form=form
                                    field=Field::Email
                                    label="Email"
                                    placeholder="Your email"
                                    kind="email"
                                />
                            </div>
                            <DraftInput
                                form=form
                                field=Field::Subject
                                label="Subject"
                                placeholder="Subject of your message"
                            />
                            <DraftInput
                                form=form
                                field=Field::Message
                                label="Message"
                                placeholder="Your message"
                                multiline=true
                            />
                            <SubmitButton form=form />
                        </form>
                    </div>
                </RevealItem>
            </div>
        </RevealSection>
    }
}

/// Required input bound to one draft field.
#[component]
fn DraftInput(
    form: RwSignal<ContactForm>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let value = move || form.with(|f| f.draft().get(field).to_string());
    let input_class = "w-full px-3 py-2 rounded-md border border-border bg-background focus:outline-none focus:ring-2 focus:ring-primary";
    let control = if multiline {
        Either::Left(view! {
            <textarea
                id=field.name()
                name=field.name()
                rows=5
                placeholder=placeholder
                required=true
                class=input_class
                prop:value=value
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            ></textarea>
        })
    } else {
        Either::Right(view! {
            <input
                id=field.name()
                name=field.name()
                type=kind
                placeholder=placeholder
                required=true
                class=input_class
                prop:value=value
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            />
        })
    };
    view! {
        <div class="space-y-2">
            <label for=field.name() class="text-sm font-medium">
                {label}
            </label>
            {control}
        </div>
    }
}

#[component]
fn SubmitButton(form: RwSignal<ContactForm>) -> impl IntoView {
    view! {
        <button
            type="submit"
            disabled=move || form.with(|f| f.is_submitting())
            class="w-full inline-flex items-center justify-center px-4 py-2 rounded-md bg-primary text-primary-foreground font-medium disabled:opacity-70"
        >
            {move || match form.with(|f| f.button_label()) {
                ButtonLabel::Sending => EitherOf3::A(view! {
                    <div class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-background border-t-transparent"></div>
                    {ButtonLabel::Sending.text()}
                }),
                ButtonLabel::Sent => EitherOf3::B(ButtonLabel::Sent.text()),
                ButtonLabel::Send => EitherOf3::C(view! {
                    <span class="mr-2">"➤"</span>
                    {ButtonLabel::Send.text()}
                }),
            }}
        </button>
    }
}
