use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::RenderError;
use crate::image::{Color, Image};
use crate::render::Timing;

/// Writes the "P3" ASCII PPM variant the reference renderer produced:
/// header, then one line per image row of tab-separated `r g b` triples.
/// Downstream viewers consume this byte-for-byte, so the exact separators
/// matter.
pub fn write_ppm<W: Write>(img: &Image, out: &mut W) -> io::Result<()> {
    write!(out, "P3\n{} {}\n255\n", img.width(), img.height())?;
    for y in 0..img.height() {
        for color in img.row(y) {
            write!(out, "{} {} {}\t", color.r, color.g, color.b)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn save_ppm<P: AsRef<Path>>(img: &Image, path: P) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_ppm(img, &mut out)?;
    out.flush()
}

/// Parses the same "P3" variant back into an `Image`. Any whitespace is
/// accepted between samples, which covers both our tabs and hand-edited
/// files.
pub fn read_ppm(text: &str) -> Result<Image, RenderError> {
    let mut tokens = text.split_whitespace();
    let mut next = |what: &str| {
        tokens
            .next()
            .ok_or_else(|| RenderError::Ppm(format!("missing {}", what)))
    };

    let magic = next("magic number")?;
    if magic != "P3" {
        return Err(RenderError::Ppm(format!("bad magic number {:?}", magic)));
    }
    let width: usize = parse(next("width")?, "width")?;
    let height: usize = parse(next("height")?, "height")?;
    if width == 0 || height == 0 {
        return Err(RenderError::Ppm("empty image".to_string()));
    }
    let maxval: u32 = parse(next("maxval")?, "maxval")?;
    if maxval != 255 {
        return Err(RenderError::Ppm(format!("unsupported maxval {}", maxval)));
    }

    let mut img = Image::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let r = parse(next("sample")?, "sample")?;
            let g = parse(next("sample")?, "sample")?;
            let b = parse(next("sample")?, "sample")?;
            img.put(x, y, Color::new(r, g, b));
        }
    }
    Ok(img)
}

fn parse<T: std::str::FromStr>(token: &str, what: &str) -> Result<T, RenderError> {
    token
        .parse()
        .map_err(|_| RenderError::Ppm(format!("bad {} {:?}", what, token)))
}

/// Timing record sink. Creating the log truncates the file; every record
/// within the same process appends, separated by blank lines.
pub struct TimingLog {
    file: File,
    records: usize,
}

impl TimingLog {
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self {
            file: File::create(path)?,
            records: 0,
        })
    }

    pub fn record(&mut self, header: &str, timing: &Timing) -> io::Result<()> {
        if self.records > 0 {
            writeln!(self.file)?;
        }
        writeln!(self.file, "{}", header)?;
        match timing.threads {
            Some(n) => writeln!(
                self.file,
                "{} {} {} {} {:.6}",
                timing.width,
                timing.height,
                timing.max_iterations,
                n,
                timing.seconds()
            )?,
            None => writeln!(
                self.file,
                "{} {} {} {:.6}",
                timing.width,
                timing.height,
                timing.max_iterations,
                timing.seconds()
            )?,
        }
        self.records += 1;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::fs;
    use std::time::Duration;

    use super::*;
    use crate::config::RenderConfig;

    #[test]
    fn test_ppm_bytes_are_exact() {
        let mut img = Image::new(2, 1);
        img.put(1, 0, Color::BLUE);
        let mut out = Vec::new();
        write_ppm(&img, &mut out).unwrap();
        assert_eq!(out, b"P3\n2 1\n255\n0 0 0\t0 0 255\t\n");
    }

    #[test]
    fn test_ppm_round_trip() {
        let mut img = Image::new(3, 2);
        img.put(0, 0, Color::BLUE);
        img.put(2, 1, Color::new(12, 34, 56));
        let mut out = Vec::new();
        write_ppm(&img, &mut out).unwrap();
        let parsed = read_ppm(std::str::from_utf8(&out).unwrap()).unwrap();
        assert_eq!(parsed, img);
    }

    #[test]
    fn test_ppm_rejects_garbage() {
        assert!(read_ppm("P6\n1 1\n255\n0 0 0").is_err());
        assert!(read_ppm("P3\n2 2\n255\n0 0 0").is_err());
        assert!(read_ppm("P3\n1 1\n65535\n0 0 0").is_err());
        assert!(read_ppm("P3\n1 1\n255\n0 0 999").is_err());
    }

    #[test]
    fn test_timing_log_truncates_then_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timing.txt");
        fs::write(&path, "stale contents\n").unwrap();

        let config = RenderConfig::new(3840, 2160, 100, 0.9);
        let mut log = TimingLog::create(&path).unwrap();
        log.record(
            "Serial (s)",
            &Timing::new(&config, None, Duration::from_millis(1500)),
        )
        .unwrap();
        log.record(
            "Parallel (s)",
            &Timing::new(&config, Some(8), Duration::from_millis(250)),
        )
        .unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "Serial (s)\n3840 2160 100 1.500000\n\nParallel (s)\n3840 2160 100 8 0.250000\n"
        );
    }
}
