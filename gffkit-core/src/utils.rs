use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };
    Ok(BufReader::new(file))
}

///
/// Read the named inputs, concatenated in argument order, into one string.
/// With no paths given, reads standard input instead and says so on stderr.
///
pub fn read_input(paths: &[String]) -> Result<String> {
    let mut buffer = String::new();

    if paths.is_empty() {
        eprintln!("No input file given, reading from stdin");
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        return Ok(buffer);
    }

    for path in paths {
        let mut reader = get_dynamic_reader(Path::new(path))?;
        reader
            .read_to_string(&mut buffer)
            .with_context(|| format!("Failed to read file: {}", path))?;
        if !buffer.ends_with('\n') {
            buffer.push('\n');
        }
    }

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_read_input_concatenates_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.gff");
        let second = dir.path().join("b.gff");
        std::fs::write(&first, "chr1\ta\tgene\t1\t2\t.\t+\t.\tID=g1").unwrap();
        std::fs::write(&second, "chr2\tb\tgene\t3\t4\t.\t-\t.\tID=g2\n").unwrap();

        let text = read_input(&[
            first.to_str().unwrap().to_string(),
            second.to_str().unwrap().to_string(),
        ])
        .unwrap();

        assert_eq!(
            text,
            "chr1\ta\tgene\t1\t2\t.\t+\t.\tID=g1\nchr2\tb\tgene\t3\t4\t.\t-\t.\tID=g2\n"
        );
    }

    #[rstest]
    fn test_gzip_input_reads_like_plain() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.gff.gz");

        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder
            .write_all(b"chr1\ta\tgene\t1\t2\t.\t+\t.\tID=g1\n")
            .unwrap();
        encoder.finish().unwrap();

        let text = read_input(&[path.to_str().unwrap().to_string()]).unwrap();
        assert_eq!(text, "chr1\ta\tgene\t1\t2\t.\t+\t.\tID=g1\n");
    }
}
