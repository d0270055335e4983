use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::{
    domain::FormPayload,
    form::{FocusTarget, FormCommand, FormEffect, FormEngine, FormState, SubmitOutcome},
    presentation::{self, UiContext},
    schema::SignupSchema,
};

use super::{
    input::{HELP_TEXT, KeyCommand, classify},
    options::UiOptions,
    status::Status,
    terminal::TerminalSession,
};

pub(crate) struct App {
    form_state: FormState,
    schema: SignupSchema,
    options: UiOptions,
    status: Status,
    exit_armed: bool,
    should_quit: bool,
}

impl App {
    pub fn new(form_state: FormState, schema: SignupSchema, options: UiOptions) -> Self {
        Self {
            form_state,
            schema,
            options,
            status: Status::Ready,
            exit_armed: false,
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<FormPayload> {
        let mut terminal = TerminalSession::open()?;
        while !self.should_quit {
            terminal.render(|frame| self.draw(frame))?;
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(_, _) => {}
                Event::Mouse(_) => {}
                Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
            }
        }
        drop(terminal);
        self.result()
    }

    fn result(&self) -> Result<FormPayload> {
        self.form_state
            .output()
            .map(|output| output.payload.clone())
            .ok_or_else(|| anyhow!("user exited without submitting"))
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let help = self.options.show_help.then_some(HELP_TEXT);
        let status = self.status.to_string();
        presentation::draw(
            frame,
            UiContext {
                form_state: &self.form_state,
                title: &self.options.title,
                status_message: &status,
                dirty: self.form_state.is_dirty(),
                error_count: self.form_state.error_count(),
                help,
            },
        );
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match classify(&key) {
            KeyCommand::Submit => self.on_submit(),
            KeyCommand::Quit => {
                self.on_exit();
                return;
            }
            KeyCommand::AddTech => self.on_add_tech(),
            KeyCommand::NextField => {
                self.dispatch(FormCommand::FocusNextField);
            }
            KeyCommand::PrevField => {
                self.dispatch(FormCommand::FocusPrevField);
            }
            KeyCommand::ResetStatus => self.status = Status::Ready,
            KeyCommand::Activate => match self.form_state.focused() {
                FocusTarget::AddTech => self.on_add_tech(),
                FocusTarget::Submit | FocusTarget::Field(_) => self.on_submit(),
            },
            KeyCommand::Edit(event) => {
                if let FormEffect::Edited(path) = self.dispatch(FormCommand::Edit(event)) {
                    self.status = Status::Editing(path.label());
                } else {
                    return;
                }
            }
            KeyCommand::None => return,
        }
        self.exit_armed = false;
    }

    fn dispatch(&mut self, command: FormCommand) -> FormEffect {
        FormEngine::new(&mut self.form_state, &self.schema).dispatch(command)
    }

    fn on_add_tech(&mut self) {
        if let FormEffect::TechAppended(index) = self.dispatch(FormCommand::AppendTech) {
            self.status = Status::TechAdded(index);
        }
    }

    fn on_submit(&mut self) {
        match self.dispatch(FormCommand::Submit) {
            FormEffect::Submitted(SubmitOutcome::Accepted) => self.status = Status::Accepted,
            FormEffect::Submitted(SubmitOutcome::Rejected { issues }) => {
                self.status = Status::Rejected(issues)
            }
            _ => {}
        }
    }

    fn on_exit(&mut self) {
        if self.options.confirm_exit && self.form_state.is_dirty() && !self.exit_armed {
            self.exit_armed = true;
            self.status = Status::ConfirmExit;
            return;
        }
        self.should_quit = true;
    }
}
