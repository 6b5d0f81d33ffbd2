pub struct MenuItem {
    pub key: char,
    pub label: String,
}

impl MenuItem {
    fn new(key: char, label: &str) -> Self {
        Self {
            key,
            label: label.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MainChoice {
    Practice,
    Modify,
    Save,
    Remove,
    Load,
    Create,
    Quit,
}

impl MainChoice {
    fn from_key(key: char) -> Option<Self> {
        match key {
            'P' => Some(MainChoice::Practice),
            'M' => Some(MainChoice::Modify),
            'S' => Some(MainChoice::Save),
            'R' => Some(MainChoice::Remove),
            'L' => Some(MainChoice::Load),
            'C' => Some(MainChoice::Create),
            'Q' => Some(MainChoice::Quit),
            _ => None,
        }
    }
}

pub struct MainMenu {
    pub items: Vec<MenuItem>,
}

impl MainMenu {
    /// List actions appear only once a list is active; practice needs at
    /// least one phrase.
    pub fn new(has_list: bool, has_phrases: bool) -> Self {
        let mut items = Vec::new();
        if has_list {
            if has_phrases {
                items.push(MenuItem::new('P', "Practice the chosen list"));
            }
            items.push(MenuItem::new('M', "Modify the current list"));
            items.push(MenuItem::new('S', "Save the current list"));
            items.push(MenuItem::new('R', "Remove the current list"));
        }
        items.push(MenuItem::new('L', "Load a previous phrase list"));
        items.push(MenuItem::new('C', "Create a new phrase list"));
        items.push(MenuItem::new('Q', "Quit the program"));
        Self { items }
    }

    pub fn render(&self) -> String {
        render_items(&self.items)
    }

    /// Case-insensitive; keys not currently offered are rejected.
    pub fn parse(&self, input: &str) -> Option<MainChoice> {
        let key = single_key(input)?;
        self.items
            .iter()
            .find(|item| item.key == key)
            .and_then(|item| MainChoice::from_key(item.key))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModifyChoice {
    Add,
    Back,
    /// 0-based index into the list.
    Select(usize),
}

impl ModifyChoice {
    pub fn items() -> Vec<MenuItem> {
        vec![
            MenuItem::new('A', "Add a new phrase"),
            MenuItem::new('B', "Back"),
        ]
    }

    /// `None` for anything unrecognised, including out-of-range numbers.
    pub fn parse(input: &str, len: usize) -> Option<Self> {
        if input.is_empty() {
            return Some(ModifyChoice::Back);
        }
        match single_key(input) {
            Some('A') => return Some(ModifyChoice::Add),
            Some('B') => return Some(ModifyChoice::Back),
            _ => {}
        }
        parse_number(input, len).map(|n| ModifyChoice::Select(n - 1))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhraseAction {
    Back,
    ChangeDomestic,
    ChangeForeign,
    Remove,
}

impl PhraseAction {
    pub fn items(domestic: &str, foreign: &str) -> Vec<MenuItem> {
        vec![
            MenuItem::new('B', "Back"),
            MenuItem::new('D', &format!("Change the domestic ({domestic}) phrase")),
            MenuItem::new('F', &format!("Change the foreign ({foreign}) phrase")),
            MenuItem::new('R', "Remove this phrase from the list"),
        ]
    }

    pub fn parse(input: &str) -> Option<Self> {
        if input.is_empty() {
            return Some(PhraseAction::Back);
        }
        match single_key(input)? {
            'B' => Some(PhraseAction::Back),
            'D' => Some(PhraseAction::ChangeDomestic),
            'F' => Some(PhraseAction::ChangeForeign),
            'R' => Some(PhraseAction::Remove),
            _ => None,
        }
    }
}

pub fn render_items(items: &[MenuItem]) -> String {
    items
        .iter()
        .map(|item| format!("   {} - {}", item.key, item.label))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A number in `1..=max`.
pub fn parse_number(input: &str, max: usize) -> Option<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=max).contains(n))
}

fn single_key(input: &str) -> Option<char> {
    let mut chars = input.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c.to_ascii_uppercase()),
        _ => None,
    }
}
