use anyhow::Result;
use tracing::{debug, warn};

use crate::config::Config;
use crate::list::codec::SEPARATOR;
use crate::list::{Languages, PhraseList};
use crate::session::{
    AnswerOutcome, PracticeOptions, PracticeReport, PracticeSession, Randomizer,
};
use crate::store::ListStore;
use crate::ui::console::Console;
use crate::ui::menu::{MainChoice, MainMenu, ModifyChoice, PhraseAction, parse_number, render_items};

/// Everything the menus act on: the active list, where lists live, and the
/// random source for practice.
pub struct App<C: Console> {
    pub config: Config,
    pub store: ListStore,
    pub list: Option<PhraseList>,
    pub console: C,
    rng: Box<dyn Randomizer>,
    should_quit: bool,
}

impl<C: Console> App<C> {
    pub fn new(config: Config, store: ListStore, console: C, rng: Box<dyn Randomizer>) -> Self {
        Self {
            config,
            store,
            list: None,
            console,
            rng,
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        while !self.should_quit {
            self.main_menu()?;
        }
        Ok(())
    }

    fn main_menu(&mut self) -> Result<()> {
        let (title, has_list, has_phrases) = match &self.list {
            Some(list) => {
                let marker = if list.is_dirty() { "*" } else { "" };
                (format!("{}{marker}", list.name), true, !list.is_empty())
            }
            None => (String::new(), false, false),
        };
        self.console.header(&title)?;

        let menu = MainMenu::new(has_list, has_phrases);
        self.console.println("")?;
        self.console.println(&menu.render())?;
        self.console.println("")?;
        self.console.println("What would you like to do?")?;
        let choice = self.console.prompt("Choice >> ")?;

        let Some(choice) = menu.parse(&choice) else {
            return Ok(());
        };
        debug!(?choice, "main menu");
        match choice {
            MainChoice::Practice => self.practice(),
            MainChoice::Modify => self.modify_list(),
            MainChoice::Save => self.save_list(),
            MainChoice::Remove => self.remove_list(),
            MainChoice::Load => {
                self.offer_save()?;
                self.load_list()
            }
            MainChoice::Create => {
                self.offer_save()?;
                self.create_list()
            }
            MainChoice::Quit => {
                self.offer_save()?;
                self.console.clear()?;
                self.should_quit = true;
                Ok(())
            }
        }
    }

    fn offer_save(&mut self) -> Result<()> {
        let Some(list) = self.list.as_ref().filter(|l| l.is_dirty()) else {
            return Ok(());
        };
        self.console.println(&format!(
            "\nYou have unsaved changes in the phrase list \"{}\", would you like to save?",
            list.name
        ))?;
        if self.console.confirm()? {
            self.save_list()?;
        }
        Ok(())
    }

    pub fn save_list(&mut self) -> Result<()> {
        let Some(list) = self.list.as_mut().filter(|l| l.is_dirty()) else {
            return Ok(());
        };
        if let Err(e) = self.store.save(list) {
            warn!(list = %list.name, error = %e, "save failed");
            self.console.println(&format!(
                "Error: Could not save the phrase list '{}'!",
                list.name
            ))?;
            self.console.pause()?;
        }
        Ok(())
    }

    fn remove_list(&mut self) -> Result<()> {
        let Some(list) = self.list.as_ref() else {
            return Ok(());
        };
        let name = list.name.clone();
        self.console.println(&format!(
            "\nDo you really wish to remove the phrase list \"{name}\"?"
        ))?;
        if !self.console.confirm()? {
            return Ok(());
        }
        match self.store.delete(&name) {
            Ok(()) => self.list = None,
            Err(e) => {
                warn!(list = %name, error = %e, "remove failed");
                self.console
                    .println(&format!("Error: Could not remove the phrase list '{name}'!"))?;
                self.console.pause()?;
            }
        }
        Ok(())
    }

    fn load_list(&mut self) -> Result<()> {
        self.console.header("Load a previous phrase list")?;

        let names = self.store.list_names();
        if names.is_empty() {
            self.console.println(
                "\n   Uh oh, there are no phrase lists to load; please go create one from the main menu!\n",
            )?;
            return self.console.pause();
        }
        self.console.println("")?;
        for (i, name) in names.iter().enumerate() {
            self.console.println(&format!("   {}. {name}", i + 1))?;
        }

        let name = loop {
            self.console.println("\nWhich phrase list to load?")?;
            let choice = self
                .console
                .prompt(&format!("Number (1-{}) >> ", names.len()))?;
            if choice.is_empty() {
                return Ok(());
            }
            match parse_number(&choice, names.len()) {
                Some(n) => break names[n - 1].clone(),
                None => self.console.println(&format!(
                    "Error: '{choice}' is not an option in the list; please select the phrase list by number!"
                ))?,
            }
        };

        match self.store.load(&name) {
            Ok(list) => self.list = Some(list),
            Err(e) => {
                self.console.println(&format!(
                    "Error: Could not parse phrase list \"{name}\"; please check line {} for syntax errors!\n",
                    e.line()
                ))?;
                self.console.pause()?;
            }
        }
        Ok(())
    }

    fn create_list(&mut self) -> Result<()> {
        self.console.header("Create a new phrase list")?;

        let name = loop {
            self.console
                .println("\nWhat is the name for the new phrase list?")?;
            let name = self.console.prompt("Name >> ")?;
            if name.is_empty() {
                return Ok(());
            }
            if self.store.exists(&name) {
                self.console.println(
                    "\nWarning: The specified list already exists. Should it be overwritten?",
                )?;
                if !self.console.confirm()? {
                    self.console.println("Please specify another name!")?;
                    continue;
                }
            }
            // An empty resource up front proves the name is writable.
            match self.store.write_all(&name, "") {
                Ok(()) => break name,
                Err(_) => self.console.println(
                    "Phrase list name is invalid; try using less special characters!",
                )?,
            }
        };

        let domestic = self.prompt_label(
            "\nWhat is the domestic (source) language of this list (e.g. English)?",
        )?;
        let foreign = self.prompt_label(
            "\nWhat is the foreign (target) language of this list (e.g. Russian)?",
        )?;

        match self.store.create(&name, Languages::new(domestic, foreign)) {
            Ok(list) => self.list = Some(list),
            Err(e) => {
                warn!(list = %name, error = %e, "create failed");
                self.console
                    .println(&format!("Error: Could not save the phrase list '{name}'!"))?;
                self.console.pause()?;
            }
        }
        Ok(())
    }

    fn prompt_label(&mut self, question: &str) -> Result<String> {
        loop {
            self.console.println(question)?;
            let label = self.console.prompt("Language >> ")?;
            if !self.reject_separator(&label)? {
                return Ok(label);
            }
        }
    }

    /// Prints a notice and returns true when `text` would break the file format.
    fn reject_separator(&mut self, text: &str) -> Result<bool> {
        if text.contains(SEPARATOR) {
            self.console
                .println(&format!("Error: '{SEPARATOR}' cannot be used here!"))?;
            return Ok(true);
        }
        Ok(false)
    }

    fn modify_list(&mut self) -> Result<()> {
        loop {
            let Some(list) = self.list.as_ref() else {
                return Ok(());
            };
            self.console.header(&format!(
                "Modify '{}' ({} -> {})",
                list.name, list.languages.domestic, list.languages.foreign
            ))?;

            if list.is_empty() {
                self.console.println(
                    "\n   There are no phrases in this list yet, go ahead and add a few!",
                )?;
            } else {
                self.console.println("")?;
                for (i, (domestic, foreign)) in list.phrases().iter().enumerate() {
                    self.console
                        .println(&format!("   {}. {domestic} -> {foreign}", i + 1))?;
                }
            }
            let len = list.len();

            self.console.println("")?;
            self.console.println(&render_items(&ModifyChoice::items()))?;
            self.console.println("")?;
            self.console
                .println("Select a phrase by number, or action by letter.")?;
            let choice = self.console.prompt("Choice >> ")?;

            match ModifyChoice::parse(&choice, len) {
                Some(ModifyChoice::Add) => self.add_phrase()?,
                Some(ModifyChoice::Back) => return Ok(()),
                Some(ModifyChoice::Select(index)) => self.modify_phrase(index)?,
                None => {}
            }
        }
    }

    fn add_phrase(&mut self) -> Result<()> {
        let Some(list) = self.list.as_ref() else {
            return Ok(());
        };
        let languages = list.languages.clone();
        self.console
            .header(&format!("Add a phrase to '{}'", list.name))?;

        let domestic = loop {
            self.console
                .println("\nWhat is the new domestic phrase you would like to add?")?;
            let domestic = self
                .console
                .prompt(&format!("{} phrase >> ", languages.domestic))?;
            if domestic.is_empty() {
                return Ok(());
            }
            if self.reject_separator(&domestic)? {
                continue;
            }
            let exists = self
                .list
                .as_ref()
                .is_some_and(|l| l.phrases().contains_key(&domestic));
            if exists {
                self.console.println(
                    "\nWarning: The specified phrase already exists in the list. Should it be overwritten?",
                )?;
                if !self.console.confirm()? {
                    self.console
                        .println("Please specify another domestic phrase!")?;
                    continue;
                }
            }
            break domestic;
        };

        let foreign = loop {
            self.console
                .println("\nWhat is the foreign phrase for this new domestic phrase?")?;
            let foreign = self
                .console
                .prompt(&format!("{} phrase >> ", languages.foreign))?;
            if foreign.is_empty() {
                return Ok(());
            }
            if !self.reject_separator(&foreign)? {
                break foreign;
            }
        };

        if let Some(list) = self.list.as_mut() {
            list.add(&domestic, &foreign);
        }
        Ok(())
    }

    fn modify_phrase(&mut self, index: usize) -> Result<()> {
        let mut domestic = match self
            .list
            .as_ref()
            .and_then(|l| l.phrases().get_index(index))
        {
            Some((domestic, _)) => domestic.to_string(),
            None => return Ok(()),
        };

        loop {
            let Some(list) = self.list.as_ref() else {
                return Ok(());
            };
            let Some(position) = list.phrases().position(&domestic) else {
                return Ok(());
            };
            let foreign = list.phrases().get(&domestic).unwrap_or_default().to_string();
            let languages = list.languages.clone();

            self.console
                .header(&format!("Modify a phrase in '{}'", list.name))?;
            self.console
                .println(&format!("\n   {}. {domestic} -> {foreign}\n", position + 1))?;
            self.console.println(&render_items(&PhraseAction::items(
                &languages.domestic,
                &languages.foreign,
            )))?;
            self.console.println("")?;
            self.console
                .println("What would you like to do to this phrase?")?;
            let choice = self.console.prompt("Choice >> ")?;

            match PhraseAction::parse(&choice) {
                Some(PhraseAction::Back) => return Ok(()),
                Some(PhraseAction::ChangeDomestic) => {
                    self.console.println(&format!(
                        "\nWhat is the new domestic phrase for \"{foreign}\"?"
                    ))?;
                    let new_domestic = self
                        .console
                        .prompt(&format!("New {} phrase >> ", languages.domestic))?;
                    if new_domestic.is_empty() || self.reject_separator(&new_domestic)? {
                        continue;
                    }
                    if let Some(list) = self.list.as_mut() {
                        list.rename(&domestic, &new_domestic, &foreign);
                    }
                    domestic = new_domestic;
                }
                Some(PhraseAction::ChangeForeign) => {
                    self.console.println(&format!(
                        "\nWhat is the new foreign phrase for \"{domestic}\"?"
                    ))?;
                    let new_foreign = self
                        .console
                        .prompt(&format!("New {} phrase >> ", languages.foreign))?;
                    if new_foreign.is_empty() || self.reject_separator(&new_foreign)? {
                        continue;
                    }
                    if let Some(list) = self.list.as_mut() {
                        list.set_foreign(&domestic, &new_foreign);
                    }
                }
                Some(PhraseAction::Remove) => {
                    if let Some(list) = self.list.as_mut() {
                        list.remove(&domestic);
                    }
                    return Ok(());
                }
                None => {}
            }
        }
    }

    fn practice(&mut self) -> Result<()> {
        let Some(list) = self.list.clone() else {
            return Ok(());
        };
        if list.is_empty() {
            return Ok(());
        }
        let languages = &list.languages;
        self.console.header(&format!(
            "Setup practice for '{}' ({} -> {})",
            list.name, languages.domestic, languages.foreign
        ))?;

        let total = list.len();
        let count = loop {
            self.console.println("\nHow many phrases should get asked?")?;
            let choice = self
                .console
                .prompt(&format!("Number (1-{total}) >> "))?;
            if choice.is_empty() {
                return Ok(());
            }
            match parse_number(&choice, total) {
                Some(n) => break n,
                None => self.console.println(&format!(
                    "Error: '{choice}' is not a valid number; make sure it's within the range 1-{total}!"
                ))?,
            }
        };

        self.console.println(
            "\nWould you like randomized initial phrases (e.g. which language phrase gets asked)?",
        )?;
        let default_yes = self.config.randomize_direction_default;
        let choice = self.console.prompt(if default_yes {
            "Choice (Y/n) >> "
        } else {
            "Choice (y/N) >> "
        })?;
        let randomize_direction = if choice.is_empty() {
            default_yes
        } else {
            choice.eq_ignore_ascii_case("y")
        };

        let mut start_with_foreign = false;
        if !randomize_direction {
            self.console.println(&format!(
                "\nLanguages:\n\n   1. {}\n   2. {}",
                languages.domestic, languages.foreign
            ))?;
            start_with_foreign = loop {
                self.console
                    .println("\nWhich language would you like to get initial phrases for?")?;
                let choice = self.console.prompt("Number (1-2) >> ")?;
                match parse_number(&choice, 2) {
                    Some(n) => break n == 2,
                    None => self.console.println(&format!(
                        "Error: '{choice}' is not a valid number; make sure it's within the range 1-2!"
                    ))?,
                }
            };
        }

        let options = PracticeOptions {
            count,
            randomize_direction,
            start_with_foreign,
        };
        let report = self.run_session(&list, options)?;
        self.show_report(&list.name, &report)
    }

    /// Asks every sampled question through the console and returns the report.
    pub fn run_session(
        &mut self,
        list: &PhraseList,
        options: PracticeOptions,
    ) -> Result<PracticeReport> {
        let mut session = PracticeSession::setup(list, options, self.rng.as_mut())?;

        loop {
            let progress = session
                .running_percentage()
                .map(|pct| (session.score(), session.asked(), pct));
            let Some(question) = session.next_question(self.rng.as_mut()) else {
                break;
            };
            let target = &question.languages.foreign;

            self.console.header(&format!(
                "'{}' ({} -> {})",
                list.name, question.languages.domestic, target
            ))?;
            if let Some((score, asked, pct)) = progress {
                self.console.println(&format!(
                    "\n   Your current score: {score}/{asked} ({pct}%)"
                ))?;
            }
            self.console.println(&format!(
                "\n{}. What is \"{}\" in {target}?",
                question.number, question.phrase
            ))?;
            let answer = self.console.prompt(&format!("Phrase in {target} >> "))?;

            if let Some(AnswerOutcome::Incorrect { given, expected }) = session.answer(&answer) {
                self.console.println("\nIncorrect!")?;
                self.console.println(&format!("\nYour answer:    {given}"))?;
                self.console.println(&format!("Correct answer: {expected}\n"))?;
                self.console.pause()?;
            }
        }

        Ok(session.finish(self.rng.as_mut()))
    }

    fn show_report(&mut self, name: &str, report: &PracticeReport) -> Result<()> {
        self.console.header(&format!(
            "'{name}' ({} -> {})",
            report.languages.domestic, report.languages.foreign
        ))?;
        self.console.println(&format!(
            "\n   Your final score: {}/{} ({}%)",
            report.score,
            report.requested,
            report.percentage()
        ))?;

        if let Some(compliment) = report.compliment {
            self.console.println(&format!("\n   {compliment} job!"))?;
        } else {
            self.console
                .println("\n   You should study the following phrases more:\n")?;
            for (domestic, foreign) in &report.review {
                self.console.println(&format!("   {domestic} -> {foreign}"))?;
            }
        }
        self.console.println("")?;
        self.console.pause()
    }
}
