pub mod cli;
#[cfg(feature = "lambda")]
pub mod lambda;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use self::args::CliConfig;

#[cfg(feature = "cli")]
mod args {
    use crate::config::toml_config::TomlConfig;
    use crate::core::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{self, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    pub const DEFAULT_OUTPUT_DIR: &str = ".";

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "golf-saju")]
    #[command(about = "Reads a birth record as JSON and prints a Four Pillars golf profile")]
    pub struct CliConfig {
        /// Read the request from this file instead of stdin
        #[arg(short, long)]
        pub input: Option<String>,

        /// Path to a TOML configuration file
        #[arg(short, long)]
        pub config: Option<String>,

        /// Base directory for written files [default: .]
        #[arg(long)]
        pub output_dir: Option<String>,

        /// Write the generator prompt to this file (relative to --output-dir)
        #[arg(long)]
        pub prompt_file: Option<String>,

        /// Append each request to this CSV file (relative to --output-dir)
        #[arg(long)]
        pub submissions: Option<String>,

        #[arg(long, help = "Pretty-print the JSON output")]
        pub pretty: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        /// 命令列參數優先，未指定的欄位才採用設定檔
        pub fn merge_file(&mut self, file: &TomlConfig) {
            if self.output_dir.is_none() {
                self.output_dir = Some(file.output_dir().to_string());
            }
            if self.prompt_file.is_none() {
                self.prompt_file = file.prompt_file().map(String::from);
            }
            if self.submissions.is_none() {
                self.submissions = file.submissions_file().map(String::from);
            }
            self.pretty |= file.pretty_output();
            self.verbose |= file.verbose();
        }
    }

    impl ConfigProvider for CliConfig {
        fn output_dir(&self) -> &str {
            self.output_dir.as_deref().unwrap_or(DEFAULT_OUTPUT_DIR)
        }

        fn pretty_output(&self) -> bool {
            self.pretty
        }

        fn prompt_file(&self) -> Option<&str> {
            self.prompt_file.as_deref()
        }

        fn submissions_file(&self) -> Option<&str> {
            self.submissions.as_deref()
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validation::validate_path("output_dir", self.output_dir())?;
            if let Some(input) = &self.input {
                validation::validate_path("input", input)?;
            }
            if let Some(prompt_file) = &self.prompt_file {
                validation::validate_path("prompt_file", prompt_file)?;
            }
            if let Some(submissions) = &self.submissions {
                validation::validate_file_extension("submissions", submissions, &["csv"])?;
            }
            Ok(())
        }
    }

}
