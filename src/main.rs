use anyhow::{bail, ensure, Context, Result};
use encoding_rs::Encoding;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use std::{
    env,
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use conllx_pos::{
    conllx::ConllXPosSampleStream,
    pos_sample::PosSample,
    stream::{ObjectStream, PlainTextByLineStream},
    utility::{tag_counts::TagCounts, zip::ZipReader},
};

enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn of(name: &str) -> Result<Self> {
        match name {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            name => bail!("Unknown output format: {}", name),
        }
    }

    fn write(&self, out: &mut impl Write, sample: &PosSample) -> Result<()> {
        match self {
            OutputFormat::Text => writeln!(out, "{}", sample)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, sample)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

struct Args {
    input_path: String,
    output_path: Option<String>,
    encoding: &'static Encoding,
    format: OutputFormat,
    zip_entry: Option<String>,
    tag_counts_path: Option<String>,
    verbose: bool,
}

// --help の場合は None
fn get_args() -> Result<Option<Args>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut opts = getopts::Options::new();
    opts.optopt("e", "encoding", "input charset (default: utf-8)", "LABEL");
    opts.optopt("f", "format", "output format: text or json (default: text)", "FORMAT");
    opts.optopt("z", "zip-entry", "read corpus entry NAME from the zip archive INPUT", "NAME");
    opts.optopt("t", "tag-counts", "write tag frequencies to FILE as CSV", "FILE");
    opts.optflag("v", "verbose", "debug logging");
    opts.optflag("h", "help", "print this help");

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    if matches.opt_present("h") {
        print!("{}", opts.usage("Usage: conllx-pos [options] INPUT [OUTPUT]"));
        return Ok(None);
    }

    let input_path = matches
        .free
        .get(0)
        .context("path to CoNLL-X corpus is required (use - for stdin)")?
        .clone();
    let output_path = matches.free.get(1).cloned();

    let encoding = match matches.opt_str("e") {
        Some(label) => Encoding::for_label(label.as_bytes())
            .with_context(|| format!("Unknown encoding: {}", label))?,
        None => encoding_rs::UTF_8,
    };

    let format = OutputFormat::of(matches.opt_str("f").as_deref().unwrap_or("text"))?;

    let zip_entry = matches.opt_str("z");
    ensure!(
        zip_entry.is_none() || input_path != "-",
        "--zip-entry cannot be used with stdin"
    );

    Ok(Some(Args {
        input_path,
        output_path,
        encoding,
        format,
        zip_entry,
        tag_counts_path: matches.opt_str("t"),
        verbose: matches.opt_present("v"),
    }))
}

fn open_lines(args: &Args) -> Result<PlainTextByLineStream> {
    let lines = match &args.zip_entry {
        Some(entry_name) => {
            let zip_file = File::open(&args.input_path)
                .with_context(|| format!("Failed to open {}", &args.input_path))?;
            let mut zip_reader = ZipReader::new(zip_file)?;

            ensure!(
                zip_reader.entry_names().contains(&entry_name.as_str()),
                "Entry {} not found in {}: {:?}",
                entry_name,
                &args.input_path,
                zip_reader.entry_names()
            );

            let bytes = zip_reader.get_by_path(entry_name)?.as_bytes()?;
            PlainTextByLineStream::from_bytes(bytes)
        }
        None if args.input_path == "-" => PlainTextByLineStream::new(io::stdin()),
        None => {
            ensure!(
                Path::new(&args.input_path).exists(),
                "File not found: {}",
                &args.input_path
            );
            PlainTextByLineStream::open(&args.input_path)
                .with_context(|| format!("Failed to open {}", &args.input_path))?
        }
    };

    Ok(lines.with_encoding(args.encoding))
}

fn main() -> Result<()> {
    let args = match get_args()? {
        Some(args) => args,
        None => return Ok(()),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "warn" }),
    )
    .init();

    debug!("Input encoding: {}", args.encoding.name());

    let mut out: Box<dyn Write> = match &args.output_path {
        Some(output_path) => Box::new(BufWriter::new(
            File::create(output_path)
                .with_context(|| format!("Failed to create {}", output_path))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let mut samples = ConllXPosSampleStream::from_lines(open_lines(&args)?);
    let mut tag_counts = TagCounts::new();
    let mut sentence_count = 0;

    let pb = create_spinner()?;

    let result = (|| -> Result<()> {
        while let Some(sample) = samples
            .read()
            .with_context(|| format!("Failed to read sentence {}", sentence_count + 1))?
        {
            args.format.write(&mut out, &sample)?;
            tag_counts.add(&sample);

            sentence_count += 1;
            pb.inc(1);
        }

        out.flush().context("Failed to flush output")
    })();

    // エラーでも必ず閉じる
    samples.close()?;
    pb.finish_and_clear();
    result?;

    info!("Read {} sentences", sentence_count);

    if let Some(tag_counts_path) = &args.tag_counts_path {
        let file = File::create(tag_counts_path)
            .with_context(|| format!("Failed to create {}", tag_counts_path))?;
        tag_counts.write_csv(BufWriter::new(file))?;
    }

    Ok(())
}

fn create_spinner() -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template(
        "{spinner} {pos} sentences [{elapsed_precise}]",
    )?);
    Ok(pb)
}
