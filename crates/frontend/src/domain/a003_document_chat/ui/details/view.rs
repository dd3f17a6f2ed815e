//! Document chat - View Component

use contracts::domain::a003_document_chat::aggregate::{ChatMessage, ChatRole};
use leptos::prelude::*;
use thaw::*;

use super::view_model::ChatVm;
use crate::shared::icons::icon;

#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let side = match message.role {
        ChatRole::User => "chat-message chat-message--user",
        ChatRole::Model | ChatRole::Loading => "chat-message chat-message--model",
    };

    view! {
        <div class=side>
            <div class="chat-message__bubble">
                {if message.is_loading() {
                    view! {
                        <div class="chat-message__dots" aria-label="Waiting for reply">
                            <span></span>
                            <span></span>
                            <span></span>
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <p class="chat-message__text">{message.content}</p> }.into_any()
                }}
            </div>
        </div>
    }
}

/// Floating "What if?" chat about the analysed document
#[component]
pub fn ChatPanel(vm: ChatVm) -> impl IntoView {
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();
    let awaiting = Signal::derive(move || vm.is_awaiting_reply());

    // Keep the newest message in view
    Effect::new(move |_| {
        vm.workflow.with(|wf| wf.transcript.len());
        if !vm.is_open.get() {
            return;
        }
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    view! {
        <Show when=move || vm.is_open.get()>
            <div class="chat-backdrop" on:click=move |_| vm.is_open.set(false)></div>
            <div class="chat-panel">
                <div class="chat-panel__header">
                    <h3>"Ask \"What If?\""</h3>
                    <button
                        type="button"
                        class="chat-panel__close"
                        title="Close chat"
                        on:click=move |_| vm.is_open.set(false)
                    >
                        {icon("close")}
                    </button>
                </div>

                <div node_ref=messages_container_ref class="chat-panel__messages">
                    <Show when=move || vm.workflow.with(|wf| wf.transcript.is_empty())>
                        <div class="chat-panel__empty">
                            <p>"Ask questions about your document like:"</p>
                            <p class="chat-panel__example">"\"What are the penalties for late payment?\""</p>
                        </div>
                    </Show>
                    <For
                        each=move || vm.workflow.with(|wf| wf.transcript.messages().to_vec())
                        key=|msg| (msg.id, msg.role)
                        let:msg
                    >
                        <MessageBubble message=msg />
                    </For>
                </div>

                <div class="chat-panel__input">
                    <Input
                        value=vm.new_message
                        placeholder="e.g., What if I pay late?"
                        disabled=awaiting
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                vm.send();
                            }
                        }
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=awaiting
                        on_click=move |_| vm.send()
                    >
                        {icon("send")}
                    </Button>
                </div>
            </div>
        </Show>

        <Show when=move || !vm.is_open.get()>
            <button
                type="button"
                class="chat-fab"
                aria-label="Open Chat"
                on:click=move |_| vm.is_open.set(true)
            >
                {icon("chat")}
            </button>
        </Show>
    }
}
