//! Document chat - View Model

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::model::send_chat;
use crate::domain::a003_document_chat::workflow::ChatWorkflow;

#[derive(Clone, Copy)]
pub struct ChatVm {
    pub workflow: RwSignal<ChatWorkflow>,
    pub new_message: RwSignal<String>,
    pub is_open: RwSignal<bool>,
}

impl ChatVm {
    pub fn new() -> Self {
        Self {
            workflow: RwSignal::new(ChatWorkflow::new()),
            new_message: RwSignal::new(String::new()),
            is_open: RwSignal::new(false),
        }
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.workflow.with(|wf| wf.transcript.is_awaiting_reply())
    }

    pub fn send(&self) {
        let text = self.new_message.get_untracked();
        let Some((pending, request)) = self
            .workflow
            .try_update(|wf| wf.begin_send(&text))
            .flatten()
        else {
            return;
        };
        self.new_message.set(String::new());

        let vm = *self;
        spawn_local(async move {
            let outcome = send_chat(&request).await;
            if let Err(e) = &outcome {
                log::error!("Chat request failed: {}", e);
            }
            let applied = vm
                .workflow
                .try_update(|wf| wf.finish(pending, outcome))
                .unwrap_or(false);
            if !applied {
                log::debug!("Chat reply {} arrived after reset", pending.id());
            }
        });
    }
}
