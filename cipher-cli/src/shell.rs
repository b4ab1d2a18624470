//! Interactive menu shell
//!
//! The shell is a small state machine that collects text and keys from the
//! user and hands them to the cipher library. All terminal interaction goes
//! through [`Prompter`] so the flow can be driven by a script in tests.

use std::path::Path;

use anyhow::Result;
use dialoguer::{Input, Select};
use tracing::debug;

use classic_ciphers::blocks::wrap_blocks;
use classic_ciphers::{
    analysis, substitution, CipherKind, PermutationCipher, RotationCipher,
    SubstitutionCipher, TextCipher,
};

use crate::io::{read_file, write_file};
use crate::report;

const DIRECTION_MENU: [&str; 3] = ["Encrypt Plaintext", "Decrypt Ciphertext", "Back"];
const INPUT_MENU: [&str; 2] = ["Enter Text Through Keyboard", "Input Text From File"];
const OUTPUT_MENU: [&str; 2] = ["Output Solution To Screen", "Output Solution To File"];
const QUIT: &str = "Quit Program";

/// Terminal interaction used by the shell
pub trait Prompter {
    /// Let the user pick one item, returning its index
    fn select(&mut self, title: &str, items: &[&str]) -> Result<usize>;

    /// Read one line of text
    fn input(&mut self, prompt: &str) -> Result<String>;

    /// Print text to the screen
    fn show(&mut self, text: &str) -> Result<()>;
}

/// Prompter backed by the terminal
#[derive(Debug, Default)]
pub struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn select(&mut self, title: &str, items: &[&str]) -> Result<usize> {
        Ok(Select::new()
            .with_prompt(title)
            .items(items)
            .default(0)
            .interact()?)
    }

    fn input(&mut self, prompt: &str) -> Result<String> {
        Ok(Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?)
    }

    fn show(&mut self, text: &str) -> Result<()> {
        println!("{text}");
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    MainMenu,
    Cipher(CipherKind),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// Menu driven front end over the cipher library
pub struct Shell<P: Prompter> {
    prompter: P,
    line_width: usize,
}

impl<P: Prompter> Shell<P> {
    pub fn new(prompter: P, line_width: usize) -> Self {
        Self {
            prompter,
            line_width,
        }
    }

    pub fn into_prompter(self) -> P {
        self.prompter
    }

    /// Run menus until the user quits
    pub fn run(&mut self) -> Result<()> {
        let mut state = State::MainMenu;

        loop {
            debug!(?state, "shell state");
            state = match state {
                State::MainMenu => self.main_menu()?,
                State::Cipher(kind) => {
                    self.cipher_menu(kind)?;
                    State::MainMenu
                }
                State::Quit => return Ok(()),
            };
        }
    }

    fn main_menu(&mut self) -> Result<State> {
        let mut items: Vec<&str> = CipherKind::ALL.iter().map(CipherKind::label).collect();
        items.push(QUIT);

        let choice = self
            .prompter
            .select("CIPHER ENCRYPTION/DECRYPTION", &items)?;
        Ok(CipherKind::ALL
            .get(choice)
            .map_or(State::Quit, |&kind| State::Cipher(kind)))
    }

    fn cipher_menu(&mut self, kind: CipherKind) -> Result<()> {
        let direction = match self.prompter.select(kind.label(), &DIRECTION_MENU)? {
            0 => Direction::Encrypt,
            1 => Direction::Decrypt,
            _ => return Ok(()),
        };

        let result = match (kind, direction) {
            (CipherKind::Rotation, Direction::Encrypt) => {
                let cipher = self.ask_shift()?;
                let text = self.ask_text()?;
                cipher.encrypt(&text)?
            }
            (CipherKind::Rotation, Direction::Decrypt) => {
                let text = self.ask_text()?;
                report::brute_force_table(&text, false)
            }
            (CipherKind::Substitution, Direction::Encrypt) => {
                let cipher = self.ask_substitution_key()?;
                let text = self.ask_text()?;
                cipher.encrypt(&text)?
            }
            (CipherKind::Substitution, Direction::Decrypt) => {
                let text = self.ask_text()?;
                self.solve_substitution(&text)?
            }
            (CipherKind::Permutation, Direction::Encrypt) => {
                let cipher = self.ask_keyword()?;
                let text = self.ask_text()?;
                let encrypted = cipher.encrypt(&text)?;
                wrap_blocks(&encrypted, cipher.key().len(), self.line_width)
            }
            (CipherKind::Permutation, Direction::Decrypt) => {
                let text = self.ask_text()?;
                let cipher = self.ask_keyword()?;
                cipher.decrypt(&text)?
            }
        };

        self.deliver(&result)
    }

    fn ask_shift(&mut self) -> Result<RotationCipher> {
        loop {
            let answer = self.prompter.input("Enter shift # (1-25) for encryption")?;
            match RotationCipher::from_input(&answer) {
                Ok(cipher) => return Ok(cipher),
                Err(err) => self.prompter.show(&err.to_string())?,
            }
        }
    }

    fn ask_keyword(&mut self) -> Result<PermutationCipher> {
        loop {
            let answer = self.prompter.input("Enter keyword")?;
            match PermutationCipher::from_keyword(&answer) {
                Ok(cipher) => return Ok(cipher),
                Err(err) => self.prompter.show(&err.to_string())?,
            }
        }
    }

    fn ask_substitution_key(&mut self) -> Result<SubstitutionCipher> {
        loop {
            let answer = self
                .prompter
                .input("Enter substitution key (26 letters, cipher letters for a-z)")?;
            match SubstitutionCipher::from_key(&answer) {
                Ok(cipher) => return Ok(cipher),
                Err(err) => self.prompter.show(&err.to_string())?,
            }
        }
    }

    fn ask_text(&mut self) -> Result<String> {
        if self.prompter.select("ENTER TEXT INPUT METHOD", &INPUT_MENU)? == 0 {
            return self.prompter.input("(Keyboard) Enter text to be processed");
        }

        loop {
            let path = self.prompter.input("(File) Enter filename")?;
            match read_file(Path::new(path.trim())) {
                Ok(text) => return Ok(text),
                Err(err) => self.prompter.show(&format!(
                    "{err:#}\nBe sure to enter an absolute path if the file is not in the current directory."
                ))?,
            }
        }
    }

    /// Suggest a mapping, then let the user swap letters until satisfied
    fn solve_substitution(&mut self, ciphertext: &str) -> Result<String> {
        self.prompter
            .show(&report::frequency_table(&analysis::count(ciphertext)))?;

        let suggestion = substitution::suggest(ciphertext)?;
        self.prompter.show(&report::correlation_table(&suggestion))?;
        let mut mapping = suggestion.mapping;

        loop {
            let candidate = substitution::apply(ciphertext, &mapping);
            self.prompter.show(&candidate)?;

            let answer = self
                .prompter
                .input("Swap two cipher letters (e.g. 'qw'), or press Enter to accept")?;
            let letters: Vec<char> = answer.trim().chars().collect();
            match letters.as_slice() {
                [] => return Ok(candidate),
                [a, b] => {
                    if let Err(err) = mapping.swap(*a, *b) {
                        self.prompter.show(&err.to_string())?;
                    }
                }
                _ => self.prompter.show("Enter exactly two letters")?,
            }
        }
    }

    fn deliver(&mut self, text: &str) -> Result<()> {
        if self.prompter.select("ENTER SOLUTION OUTPUT LOCATION", &OUTPUT_MENU)? == 0 {
            return self.prompter.show(text);
        }

        loop {
            let path = self.prompter.input("(File) Enter filename")?;
            match write_file(Path::new(path.trim()), text) {
                Ok(()) => return Ok(()),
                Err(err) => self.prompter.show(&format!("{err:#}"))?,
            }
        }
    }
}
