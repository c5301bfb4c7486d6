use colored::Colorize;

pub struct Theme {
    pub title: fn(&str) -> String,
    pub label: fn(&str) -> String,
    pub line: fn(&str) -> String,
    pub result: fn(&str) -> String,
    pub lang: fn(&str) -> String,
    pub code: fn(&str) -> String,
    pub success: fn(&str) -> String,
    pub error: fn(&str) -> String,
    pub info: fn(&str) -> String,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        match name {
            "temp" | "" => Self::temp(),
            "wudao" => Self::wudao(),
            "canvas" => Self::canvas(),
            _ => {
                eprintln!("{}", format!("✘ Unknown theme: {}", name).red());
                Self::temp()
            }
        }
    }

    fn temp() -> Self {
        Self {
            title: |s| s.bright_magenta().italic().bold().underline().to_string(),
            label: |s| s.cyan().bold().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            result: |s| s.white().bold().to_string(),
            lang: |s| s.cyan().italic().to_string(),
            code: |s| s.bright_white().dimmed().to_string(),
            success: |s| s.green().to_string(),
            error: |s| s.red().to_string(),
            info: |s| s.blue().to_string(),
        }
    }

    fn wudao() -> Self {
        Self {
            title: |s| s.red().italic().bold().underline().to_string(),
            label: |s| s.green().italic().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            result: |s| s.bright_white().to_string(),
            lang: |s| s.cyan().to_string(),
            code: |s| s.bright_yellow().dimmed().italic().to_string(),
            success: |s| s.bright_green().to_string(),
            error: |s| s.bright_red().to_string(),
            info: |s| s.yellow().to_string(),
        }
    }

    fn canvas() -> Self {
        Self {
            title: |s| s.blue().bold().underline().to_string(),
            label: |s| s.bright_cyan().bold().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            result: |s| s.black().to_string(),
            lang: |s| s.magenta().to_string(),
            code: |s| s.bright_black().italic().to_string(),
            success: |s| s.green().bold().to_string(),
            error: |s| s.red().bold().to_string(),
            info: |s| s.bright_blue().to_string(),
        }
    }
}
