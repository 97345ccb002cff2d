use std::fmt::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use codespan_reporting::diagnostic::Diagnostic;
use codespan_reporting::files::{Files, SimpleFile};
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use tallyc::CompileError;
use tallyc::codegen::Codegen;
use tallyc::lexer::Lexer;

use crate::cli::Cli;
use crate::report::{Report, SimpleReport};

pub struct Driver {
    expr:       String,
    output:     Option<PathBuf>,
    max_errors: usize,
    quiet:      bool,
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver {
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(<Cli as clap::Parser>::parse())
    }

    fn from_config(cfg: Cli) -> Self {
        Self {
            expr:       cfg.expr,
            output:     cfg.output,
            max_errors: cfg.max_errors,
            quiet:      cfg.quiet,
        }
    }

    pub fn run(self) -> ExitCode {
        let asm = match self.compile() {
            Ok(asm) => asm,
            Err(err) => {
                self.report_compile_error("<expr>", self.expr.clone(), err);
                return ExitCode::FAILURE;
            }
        };

        if let Err(err) = self.write_output(&asm) {
            if !self.quiet {
                let file = SimpleFile::new("<expr>", self.expr.clone());
                SimpleReport::new(format!("cannot write output: {err}")).report(&file);
            }
            return ExitCode::FAILURE;
        }

        ExitCode::SUCCESS
    }

    fn compile(&self) -> Result<String, CompileError> {
        let tokens = Lexer::new(&self.expr).lex_all()?;
        let asm = Codegen::new(&tokens).emit()?;
        Ok(asm)
    }

    fn write_output(&self, asm: &str) -> std::io::Result<()> {
        self.output.as_ref().map_or_else(
            || {
                print!("{asm}");
                Ok(())
            },
            |path| std::fs::write(path, asm),
        )
    }

    fn report<'a, F, E>(&self, errors: &[E], files: &'a F)
    where
        F: Files<'a, FileId = ()>,
        E: Report,
    {
        if self.quiet {
            return;
        }
        let writer = StandardStream::stderr(ColorChoice::Always);
        let config = codespan_reporting::term::Config::default();
        let mut displayed = 0;
        {
            let mut writer = writer.lock();
            for e in errors.iter().take(self.max_errors) {
                let diagnostic = e.diagnose();
                let _ = term::emit(&mut writer, &config, files, &diagnostic);
                displayed += 1;
            }
        }

        let mut message = String::from("could not compile expression");

        let _ = message.write_fmt(format_args!(
            " due to {} previous {} ({displayed} emitted)",
            errors.len(),
            if errors.len() > 1 { "errors" } else { "error" },
        ));

        let error = Diagnostic::error().with_message(message);

        let _ = term::emit(&mut writer.lock(), &config, files, &error);
    }

    fn report_compile_error(&self, name: &str, source: String, error: CompileError) {
        let file = SimpleFile::new(name, source);
        match error {
            CompileError::Lex(spands) => self.report(&spands, &file),
            CompileError::Codegen(err) => self.report(&[err], &file),
        }
    }
}
