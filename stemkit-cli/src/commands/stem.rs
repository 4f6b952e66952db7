//! Stem command implementation

use anyhow::{Context, Result};
use clap::{ArgGroup, Args};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use stemkit_core::{ConfigBuilder, Stemmer};

use super::init_logging;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, OutputFormat};
use crate::progress::ProgressReporter;

/// Arguments for the stem command
#[derive(Debug, Args)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "word"])))]
pub struct StemArgs {
    /// Input files or patterns (supports glob), one word per line
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Word to stem; repeat for several
    #[arg(short, long, value_name = "WORD")]
    pub word: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: text, or the config file's default_format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Language name or ISO 639 code (default: english)
    #[arg(short, long, value_name = "LANG", env = "STEMKIT_LANGUAGE")]
    pub language: Option<String>,

    /// Stem input files concurrently
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads (default: one per CPU)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Words from one source with their stems, index-aligned
#[derive(Debug)]
struct StemmedList {
    words: Vec<String>,
    stems: Vec<String>,
}

impl StemArgs {
    /// Execute the stem command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting stemming");
        log::debug!("Arguments: {:?}", self);

        let settings = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let threads = self.threads.or(settings.performance.threads());
        let stemmer = self.build_stemmer(&settings, threads)?;
        let format = self.resolve_format(&settings)?;
        log::info!("Language: {}", stemmer.language());

        let lists = if self.word.is_empty() {
            self.stem_files(&stemmer, threads)?
        } else {
            vec![StemmedList {
                words: self.word.clone(),
                stems: stemmer.stem_batch(&self.word)?,
            }]
        };

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter = create_formatter(format, writer, settings.output.pretty_json);

        let mut total = 0;
        for list in &lists {
            for (word, stem) in list.words.iter().zip(&list.stems) {
                formatter.format_stem(word, stem)?;
            }
            total += list.words.len();
        }
        formatter.finish()?;

        log::info!("Stemmed {} words", total);
        Ok(())
    }

    fn build_stemmer(&self, settings: &CliConfig, threads: Option<usize>) -> Result<Stemmer> {
        let language = self
            .language
            .clone()
            .unwrap_or_else(|| settings.stemming.default_language.clone());
        let config = ConfigBuilder::new()
            .language(language)?
            .threads(threads)
            .parallel_threshold(settings.performance.parallel_threshold)
            .build()?;
        Ok(Stemmer::with_config(config)?)
    }

    fn resolve_format(&self, settings: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        <OutputFormat as clap::ValueEnum>::from_str(&settings.output.default_format, true)
            .map_err(|_| {
                CliError::ConfigError(format!(
                    "unknown output format '{}'",
                    settings.output.default_format
                ))
                .into()
            })
    }

    fn stem_files(&self, stemmer: &Stemmer, threads: Option<usize>) -> Result<Vec<StemmedList>> {
        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to stem", files.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let stem_file = |path: &PathBuf| -> Result<StemmedList> {
            let list = stem_one_file(stemmer, path)?;
            progress.file_completed(&path.display().to_string(), list.words.len());
            Ok(list)
        };

        let lists = if self.parallel && files.len() > 1 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads.unwrap_or_else(num_cpus::get))
                .thread_name(|i| format!("stemkit-file-{i}"))
                .build()
                .context("Failed to build thread pool")?;
            log::debug!(
                "Stemming {} files on {} threads",
                files.len(),
                pool.current_num_threads()
            );
            pool.install(|| files.par_iter().map(&stem_file).collect::<Result<Vec<_>>>())?
        } else {
            files.iter().map(&stem_file).collect::<Result<Vec<_>>>()?
        };

        progress.finish();
        Ok(lists)
    }
}

fn stem_one_file(stemmer: &Stemmer, path: &Path) -> Result<StemmedList> {
    log::debug!("{}: {} bytes", path.display(), FileReader::file_size(path)?);
    let words = FileReader::read_words(path)?;
    let stems = stemmer
        .stem_batch(&words)
        .with_context(|| format!("Failed to stem {}", path.display()))?;
    Ok(StemmedList { words, stems })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args() -> StemArgs {
        StemArgs {
            input: Vec::new(),
            word: Vec::new(),
            output: None,
            format: None,
            language: None,
            parallel: false,
            threads: None,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_flag_language_beats_config() {
        let mut settings = CliConfig::default();
        settings.stemming.default_language = "de".to_string();

        let stemmer = args().build_stemmer(&settings, None).unwrap();
        assert_eq!(stemmer.language(), stemkit_core::Language::German);

        let mut with_flag = args();
        with_flag.language = Some("sv".to_string());
        let stemmer = with_flag.build_stemmer(&settings, None).unwrap();
        assert_eq!(stemmer.language(), stemkit_core::Language::Swedish);
    }

    #[test]
    fn test_unknown_language_fails() {
        let mut bad = args();
        bad.language = Some("klingon".to_string());
        let err = bad.build_stemmer(&CliConfig::default(), None).unwrap_err();
        assert!(err.to_string().contains("klingon"));
    }

    #[test]
    fn test_zero_threads_rejected() {
        assert!(args().build_stemmer(&CliConfig::default(), Some(0)).is_err());
    }

    #[test]
    fn test_format_falls_back_to_config() {
        let mut settings = CliConfig::default();
        settings.output.default_format = "Markdown".to_string();
        assert_eq!(
            args().resolve_format(&settings).unwrap(),
            OutputFormat::Markdown
        );

        let mut with_flag = args();
        with_flag.format = Some(OutputFormat::Json);
        assert_eq!(with_flag.resolve_format(&settings).unwrap(), OutputFormat::Json);

        settings.output.default_format = "yaml".to_string();
        assert!(args().resolve_format(&settings).is_err());
    }

    #[test]
    fn test_parallel_files_keep_order() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "running\ncats\n").unwrap();
        fs::write(dir.path().join("b.txt"), "ponies\n\nhappily\n").unwrap();

        let mut parallel = args();
        parallel.input = vec![dir.path().join("*.txt").to_string_lossy().into_owned()];
        parallel.parallel = true;

        let stemmer = Stemmer::new(stemkit_core::Language::English);
        let lists = parallel.stem_files(&stemmer, Some(2)).unwrap();
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].stems, vec!["run", "cat"]);
        assert_eq!(lists[1].words, vec!["ponies", "happily"]);
        assert_eq!(lists[1].stems, vec!["poni", "happili"]);
    }
}
