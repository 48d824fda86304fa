//! Runs a [`Calendar`] on its own task.
//!
//! Requests from handlers and finished lookups are merged in one loop, so the
//! calendar is only ever touched from that task.

use tokio::sync::{mpsc, oneshot};

use super::Calendar;
use crate::errors::AppError;
use crate::form::{FieldErrors, FormState, LookupCompletion};
use crate::models::meeting::{Field, Meeting};
use crate::provider::MeetingProvider;

enum Command {
    Input { field: Field, value: String, reply: oneshot::Sender<FormState> },
    SelectSuggestion { field: Field, value: String, reply: oneshot::Sender<FormState> },
    Submit { reply: oneshot::Sender<Result<Meeting, FieldErrors>> },
    Form { reply: oneshot::Sender<FormState> },
    Meetings { reply: oneshot::Sender<Vec<Meeting>> },
}

enum Event {
    Command(Command),
    Lookup(LookupCompletion),
}

/// Cheap, cloneable access to a running calendar.
#[derive(Clone)]
pub struct CalendarHandle {
    commands: mpsc::Sender<Command>,
}

/// Start the calendar task. It stops once every handle is dropped.
pub fn spawn<P: MeetingProvider>(calendar: Calendar<P>) -> CalendarHandle {
    let (tx, rx) = mpsc::channel(64);
    tokio::spawn(run(calendar, rx));
    CalendarHandle { commands: tx }
}

async fn run<P: MeetingProvider>(mut calendar: Calendar<P>, mut commands: mpsc::Receiver<Command>) {
    loop {
        let event = tokio::select! {
            cmd = commands.recv() => match cmd {
                Some(cmd) => Event::Command(cmd),
                None => break,
            },
            Some(done) = calendar.form_mut().recv_completion() => Event::Lookup(done),
        };

        match event {
            Event::Lookup(done) => {
                calendar.form_mut().apply_completion(done);
            }
            Event::Command(cmd) => handle(&mut calendar, cmd),
        }
    }
    log::info!("Calendar service stopped");
}

fn handle<P: MeetingProvider>(calendar: &mut Calendar<P>, cmd: Command) {
    // A dropped reply receiver only means the caller went away.
    match cmd {
        Command::Input { field, value, reply } => {
            calendar.input(field, value);
            let _ = reply.send(calendar.form_state().clone());
        }
        Command::SelectSuggestion { field, value, reply } => {
            calendar.select_suggestion(field, &value);
            let _ = reply.send(calendar.form_state().clone());
        }
        Command::Submit { reply } => {
            let _ = reply.send(calendar.submit());
        }
        Command::Form { reply } => {
            let _ = reply.send(calendar.form_state().clone());
        }
        Command::Meetings { reply } => {
            let _ = reply.send(calendar.meetings().as_slice().to_vec());
        }
    }
}

impl CalendarHandle {
    async fn request<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> Result<T, AppError> {
        let (reply, rx) = oneshot::channel();
        self.commands
            .send(make(reply))
            .await
            .map_err(|_| AppError::Unavailable)?;
        rx.await.map_err(|_| AppError::Unavailable)
    }

    pub async fn input(&self, field: Field, value: String) -> Result<FormState, AppError> {
        self.request(|reply| Command::Input { field, value, reply }).await
    }

    pub async fn select_suggestion(
        &self,
        field: Field,
        value: String,
    ) -> Result<FormState, AppError> {
        self.request(|reply| Command::SelectSuggestion { field, value, reply }).await
    }

    pub async fn submit(&self) -> Result<Result<Meeting, FieldErrors>, AppError> {
        self.request(|reply| Command::Submit { reply }).await
    }

    pub async fn form(&self) -> Result<FormState, AppError> {
        self.request(|reply| Command::Form { reply }).await
    }

    pub async fn meetings(&self) -> Result<Vec<Meeting>, AppError> {
        self.request(|reply| Command::Meetings { reply }).await
    }
}
