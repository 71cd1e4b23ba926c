//! REPL that walks a visitor through registration and the five sections

use crate::output::console::ConsoleFormatter;
use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::Result as RlResult;
use rustyline::error::ReadlineError;
use socialflip_application::{
    AssessmentSession, ExportReportUseCase, RegisterLeadError, RegisterLeadUseCase,
};
use socialflip_domain::{Assessment, Lead, Question, Section};
use std::path::PathBuf;
use tracing::debug;

/// Commands accepted at any question prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    /// Leave the rest of the current section unanswered
    Skip,
    Quit,
}

impl ReplCommand {
    pub fn parse(line: &str) -> Option<Result<Self, String>> {
        let line = line.trim();
        if !line.starts_with('/') {
            return None;
        }
        Some(match line {
            "/help" | "/h" | "/?" => Ok(ReplCommand::Help),
            "/skip" | "/next" => Ok(ReplCommand::Skip),
            "/quit" | "/exit" | "/q" => Ok(ReplCommand::Quit),
            other => Err(format!("Unknown command: {}", other)),
        })
    }
}

enum Flow {
    Continue,
    Quit,
}

/// Interactive assessment REPL
pub struct AssessmentRepl {
    session: AssessmentSession,
    formatter: Box<dyn OutputFormatter>,
    register: Option<RegisterLeadUseCase>,
    lead: Lead,
    export: Option<ExportReportUseCase>,
    /// `None`: ask first. `Some(None)`: configured default path.
    pdf_target: Option<Option<PathBuf>>,
}

impl AssessmentRepl {
    pub fn new(session: AssessmentSession, formatter: Box<dyn OutputFormatter>) -> Self {
        Self {
            session,
            formatter,
            register: None,
            lead: Lead::default(),
            export: None,
            pdf_target: None,
        }
    }

    /// Ask for name and email before the first section
    pub fn with_registration(mut self, use_case: RegisterLeadUseCase, prefill: Lead) -> Self {
        self.register = Some(use_case);
        self.lead = prefill;
        self
    }

    /// Export once the summary is available; without a target the visitor is asked
    pub fn with_export(
        mut self,
        use_case: ExportReportUseCase,
        target: Option<Option<PathBuf>>,
    ) -> Self {
        self.export = Some(use_case);
        self.pdf_target = target;
        self
    }

    /// Run the session and hand back whatever was answered
    pub async fn run(mut self) -> RlResult<Assessment> {
        let mut rl = DefaultEditor::new()?;

        self.print_welcome();

        if self.register.is_some() && matches!(self.register_lead(&mut rl).await?, Flow::Quit) {
            return Ok(self.session.into_assessment());
        }

        for section in Section::ALL {
            if matches!(self.run_section(&mut rl, section)?, Flow::Quit) {
                break;
            }
        }

        println!("{}", self.formatter.assessment(self.session.assessment()));

        if self.session.is_complete() {
            self.offer_export(&mut rl)?;
        }

        Ok(self.session.into_assessment())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│   SocialFlip - Content Repurposing Check    │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Press Enter to leave a question blank.");
        println!("Commands:");
        println!("  /skip, /next     - Skip the rest of this step");
        println!("  /help, /h, /?    - Show this help");
        println!("  /quit, /exit, /q - Finish early and show results");
        println!();
    }

    async fn register_lead(&mut self, rl: &mut DefaultEditor) -> RlResult<Flow> {
        println!("{}", "Register to start your assessment".cyan().bold());

        loop {
            let Some(name) = read_line(rl, "Name: ", &self.lead.name)? else {
                return Ok(Flow::Quit);
            };
            let Some(email) = read_line(rl, "Email: ", &self.lead.email)? else {
                return Ok(Flow::Quit);
            };
            self.lead = Lead::new(name.trim(), email.trim());

            let Some(use_case) = self.register.as_ref() else {
                return Ok(Flow::Continue);
            };

            match use_case.execute(&self.lead).await {
                Ok(()) => {
                    println!("{}\n", format!("Thanks, {}!", self.lead.name).green());
                    return Ok(Flow::Continue);
                }
                Err(RegisterLeadError::Invalid(errors)) => {
                    print!("{}", ConsoleFormatter::lead_errors(&errors));
                }
                Err(e @ RegisterLeadError::SubmissionFailed(_)) => {
                    eprintln!("{}", e.to_string().red());
                    if !confirm(rl, "Try again? [Y/n] ")? {
                        return Ok(Flow::Quit);
                    }
                }
            }
        }
    }

    fn run_section(&mut self, rl: &mut DefaultEditor, section: Section) -> RlResult<Flow> {
        print!("{}", ConsoleFormatter::section_intro(section));

        for question in section.questions() {
            match self.ask(rl, section, question)? {
                Some(ReplCommand::Skip) => break,
                Some(ReplCommand::Quit) => return Ok(Flow::Quit),
                Some(ReplCommand::Help) | None => {}
            }
        }

        if let Some(report) = self.session.report(section) {
            debug!("{} answered with {} warnings", section.key(), report.warnings.len());
            print!("{}", self.formatter.section(section, &report));
        }
        print!("{}", ConsoleFormatter::sources(section));

        Ok(Flow::Continue)
    }

    /// Ask until the answer parses; returns the command that ended the question, if any
    fn ask(
        &mut self,
        rl: &mut DefaultEditor,
        section: Section,
        question: &Question,
    ) -> RlResult<Option<ReplCommand>> {
        print!("\n{}", ConsoleFormatter::question_prompt(question));

        loop {
            let Some(line) = read_line(rl, "> ", "")? else {
                return Ok(Some(ReplCommand::Quit));
            };

            match ReplCommand::parse(&line) {
                Some(Ok(ReplCommand::Help)) => {
                    Self::print_help();
                    continue;
                }
                Some(Ok(command)) => return Ok(Some(command)),
                Some(Err(message)) => {
                    println!("{}", message.yellow());
                    continue;
                }
                None => {}
            }

            if line.trim().is_empty() {
                return Ok(None);
            }

            let result = question
                .parse_input(&line)
                .and_then(|value| self.session.answer(section, question.id, value));
            match result {
                Ok(report) => {
                    print!("{}", ConsoleFormatter::live_metrics(&report));
                    return Ok(None);
                }
                Err(e) => println!("{}", e.to_string().red()),
            }
        }
    }

    fn offer_export(&self, rl: &mut DefaultEditor) -> RlResult<()> {
        let Some(use_case) = self.export.as_ref() else {
            return Ok(());
        };

        if self.pdf_target.is_none() && !confirm(rl, "Export PDF report? [Y/n] ")? {
            return Ok(());
        }

        let path = self.pdf_target.as_ref().and_then(|p| p.as_deref());
        match use_case.execute(self.session.assessment(), path) {
            Ok(output) => println!(
                "{} {}",
                "Report saved to".green(),
                output.path.display().to_string().bold()
            ),
            Err(e) => eprintln!("{} {}", "Export failed:".red().bold(), e),
        }
        Ok(())
    }
}

/// Read one line; `None` on Ctrl-C or Ctrl-D
fn read_line(rl: &mut DefaultEditor, prompt: &str, initial: &str) -> RlResult<Option<String>> {
    match rl.readline_with_initial(prompt, (initial, "")) {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err),
    }
}

fn confirm(rl: &mut DefaultEditor, prompt: &str) -> RlResult<bool> {
    Ok(read_line(rl, prompt, "")?.is_some_and(|answer| is_yes(&answer)))
}

/// Blank counts as yes
fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "" | "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_input_is_not_a_command() {
        assert_eq!(ReplCommand::parse("42"), None);
        assert_eq!(ReplCommand::parse("Video"), None);
    }

    #[test]
    fn test_commands() {
        assert_eq!(ReplCommand::parse("/skip"), Some(Ok(ReplCommand::Skip)));
        assert_eq!(ReplCommand::parse(" /q "), Some(Ok(ReplCommand::Quit)));
        assert_eq!(ReplCommand::parse("/?"), Some(Ok(ReplCommand::Help)));
        assert!(matches!(ReplCommand::parse("/bogus"), Some(Err(_))));
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes(""));
        assert!(is_yes(" Y "));
        assert!(is_yes("yes"));
        assert!(!is_yes("n"));
        assert!(!is_yes("later"));
    }
}
