use std::io::{self, Write};

use crate::core::context::AppContext;
use crate::core::models::Student;
use crate::core::types::{AgeBracket, OutputFormat, SortOrder};
use crate::errors::Result;
use crate::export::{self, CSV_EXPORT_FILE, JSON_EXPORT_FILE};
use crate::logging::{LogTarget, Logger};
use crate::prompter::flows::selection::{SelectionPrompt, parse_view_band};
use crate::prompter::models::{Flow, FlowCtrl, MenuState, ViewTarget};
use crate::select::criteria::SelectionCriteria;
use crate::select::filter::{filter_by_band, filter_by_bracket, filter_by_category};
use crate::select::rank::rank;
use crate::ui::ansi::STYLE_RESET;
use crate::ui::chrome::UiChrome;
use crate::ui::display_manager::DisplayManager;

pub struct MainFlow<'a> {
    ctx: &'a mut AppContext,
    dm: DisplayManager,
    chrome: UiChrome,
    logger: Logger,
    state: MenuState,
}

impl<'a> MainFlow<'a> {
    pub fn new(ctx: &'a mut AppContext) -> Self {
        let logger = ctx.logger.clone();
        Self {
            ctx,
            dm: DisplayManager::new(),
            chrome: UiChrome::new(),
            logger,
            state: MenuState::Menu,
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &MenuState {
        &self.state
    }
}

impl<'a> Flow for MainFlow<'a> {
    fn render(&mut self) -> Result<()> {
        self.print_startup();
        match &self.state {
            MenuState::Menu => {
                self.print_menu();
                self.chrome.print_prompt("Enter your choice (1-5): ");
            }
            MenuState::GradePick => {
                self.chrome.print_prompt("Enter grade to view (A, B, C): ");
            }
            MenuState::AgePick => {
                self.chrome
                    .print_prompt("Enter age category (senior, young): ");
            }
            MenuState::ViewOrderPick(_) => {
                self.chrome.print_prompt("Enter sorting order (asc, desc): ");
            }
            MenuState::Selection(prompt) => {
                self.chrome.print_prompt(prompt.prompt_text());
            }
        }
        Ok(())
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        self.prepare_output_space();
        let line = input.trim();

        // 'back' abandons any sub-prompt and returns to the menu.
        if !matches!(self.state, MenuState::Menu) && line.eq_ignore_ascii_case("back") {
            self.state = MenuState::Menu;
            return Ok(FlowCtrl::Continue);
        }

        match std::mem::replace(&mut self.state, MenuState::Menu) {
            MenuState::Menu => self.handle_menu_choice(line),
            MenuState::GradePick => Ok(self.handle_grade_pick(line)),
            MenuState::AgePick => Ok(self.handle_age_pick(line)),
            MenuState::ViewOrderPick(target) => Ok(self.handle_view_order(target, line)),
            MenuState::Selection(prompt) => Ok(self.handle_selection(prompt, line)),
        }
    }
}

impl<'a> MainFlow<'a> {
    fn print_startup(&mut self) {
        if self.ctx.startup_displayed {
            return;
        }
        self.chrome.print_banner();
        println!();
        println!(
            "Loaded {} students from {}.",
            self.ctx.dataset.len(),
            self.ctx.roster_path.display()
        );
        println!("Config path: {}", self.ctx.config.path().display());
        println!("Exports path: {}", self.ctx.exports_dir.display());
        println!("Logs path: {}", self.ctx.logs_dir.display());
        println!();
        println!("Type 'back' to return to the menu, 'exit' to quit.");
        self.ctx.startup_displayed = true;
    }

    fn print_menu(&self) {
        println!();
        println!("Student Data Selector");
        println!("=====================");
        println!("1. View by Grade (A, B, C)");
        println!("2. View by Age Category (senior, young)");
        println!("3. Filter and Export (csv, json)");
        println!("4. Show All Data");
        println!("5. Exit");
    }

    fn prepare_output_space(&self) {
        self.chrome.print_prompt_bottom_padding();
        println!();
        print!("{STYLE_RESET}");
        let _ = io::stdout().flush();
    }

    fn handle_menu_choice(&mut self, line: &str) -> Result<FlowCtrl> {
        match line {
            "1" => self.state = MenuState::GradePick,
            "2" => self.state = MenuState::AgePick,
            "3" => self.state = MenuState::Selection(SelectionPrompt::new()),
            "4" => self.show_all_data(),
            "5" => {
                println!("Exiting program...");
                return Ok(FlowCtrl::Finish);
            }
            "" => {}
            _ => {
                self.logger.error(
                    "Invalid choice. Please enter a number between 1 and 5.",
                    LogTarget::ConsoleOnly,
                );
            }
        }
        if matches!(line, "1" | "2" | "3" | "4") {
            self.logger
                .info(format!("Menu action: {line}"), LogTarget::FileOnly);
        }
        Ok(FlowCtrl::Continue)
    }

    fn handle_grade_pick(&mut self, line: &str) -> FlowCtrl {
        match parse_view_band(line) {
            Ok(band) => self.state = MenuState::ViewOrderPick(ViewTarget::Band(band)),
            Err(err) => {
                self.logger.error(err.to_string(), LogTarget::ConsoleOnly);
                self.state = MenuState::GradePick;
            }
        }
        FlowCtrl::Continue
    }

    fn handle_age_pick(&mut self, line: &str) -> FlowCtrl {
        match AgeBracket::try_from(line) {
            Ok(bracket) => self.state = MenuState::ViewOrderPick(ViewTarget::Bracket(bracket)),
            Err(err) => {
                self.logger.error(err.to_string(), LogTarget::ConsoleOnly);
                self.state = MenuState::AgePick;
            }
        }
        FlowCtrl::Continue
    }

    fn handle_view_order(&mut self, target: ViewTarget, line: &str) -> FlowCtrl {
        let order = match SortOrder::try_from(line) {
            Ok(order) => order,
            Err(err) => {
                self.logger.error(err.to_string(), LogTarget::ConsoleOnly);
                self.state = MenuState::ViewOrderPick(target);
                return FlowCtrl::Continue;
            }
        };

        let students = &self.ctx.dataset.students;
        let (filtered, title): (Vec<Student>, String) = match target {
            ViewTarget::Band(band) => (
                filter_by_band(students, band),
                format!("Students with grade {band}"),
            ),
            ViewTarget::Bracket(bracket) => {
                (filter_by_bracket(students, bracket), view_title(bracket))
            }
        };

        let ranked = rank(&filtered, order, self.ctx.config.sort_key_mode());
        self.dm.display_ranked(&title, &ranked);
        self.logger
            .info(format!("Displayed view: {title}"), LogTarget::FileOnly);
        FlowCtrl::Continue
    }

    fn handle_selection(&mut self, mut prompt: SelectionPrompt, line: &str) -> FlowCtrl {
        match prompt.feed(line) {
            Ok(Some(criteria)) => self.run_export(criteria),
            Ok(None) => self.state = MenuState::Selection(prompt),
            Err(err) => {
                self.logger.error(err.to_string(), LogTarget::ConsoleOnly);
                self.state = MenuState::Selection(prompt);
            }
        }
        FlowCtrl::Continue
    }

    fn run_export(&mut self, criteria: SelectionCriteria) {
        let filtered = filter_by_category(&self.ctx.dataset.by_category, &criteria);
        let ranked = rank(&filtered, criteria.order, self.ctx.config.sort_key_mode());

        let path = self.ctx.exports_dir.join(match criteria.format {
            OutputFormat::Csv => CSV_EXPORT_FILE,
            OutputFormat::Json => JSON_EXPORT_FILE,
        });
        let result = match criteria.format {
            OutputFormat::Csv => {
                export::export_csv(&ranked, &path, self.ctx.config.csv_header_style())
            }
            OutputFormat::Json => export::export_json(&ranked, &path),
        };

        // Export failures are reported and the menu loop continues.
        match result {
            Ok(written) => self.logger.info(
                format!("Data successfully saved to {}", written.display()),
                LogTarget::ConsoleAndFile,
            ),
            Err(err) => self
                .logger
                .error(err.to_string(), LogTarget::ConsoleAndFile),
        }
    }

    fn show_all_data(&mut self) {
        println!();
        println!("All Student Data:");
        self.dm.display_all_students(&self.ctx.dataset.students);
        self.logger
            .info("Displayed all student data", LogTarget::FileOnly);
    }
}

fn view_title(bracket: AgeBracket) -> String {
    let label = bracket.to_string();
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => format!("{}{} students", first.to_uppercase(), chars.as_str()),
        None => "Students".to_string(),
    }
}
