//! PNG export of histograms by running gnuplot.

use crate::histogram::{Histogram, HistogramError};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tempfile::NamedTempFile;

/// Default name of the gnuplot executable, looked up in `PATH`
const DEFAULT_GNUPLOT: &str = "gnuplot";

/// Configuration of the PNG export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotConfig {
    /// gnuplot executable, either a name looked up in `PATH` or a path
    pub executable: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            executable: DEFAULT_GNUPLOT.to_string(),
        }
    }
}

impl PlotConfig {
    /// Sets the gnuplot executable.
    pub fn with_executable(mut self, executable: impl Into<String>) -> Self {
        self.executable = executable.into();
        self
    }
}

impl Histogram {
    /// Plots the histogram with gnuplot and writes the PNG image to `path`.
    ///
    /// Data and script are passed to gnuplot as temporary files, which are
    /// removed afterwards, and the image is read from gnuplot's stdout.
    /// The x axis (years before present) is reversed.
    ///
    /// # Arguments
    /// * `path` - Output file for the image
    /// * `title` - Put in front of "Population Growth" in the image title,
    ///   usually the name of the plotted subclade
    /// * `config` - gnuplot executable
    ///
    /// # Errors
    /// * [HistogramError::Gnuplot] - if gnuplot cannot be started or fails
    /// * [HistogramError::Io] - if temporary files or the image cannot be written
    pub fn write_png<P: AsRef<Path>>(
        &self,
        path: P,
        title: &str,
        config: &PlotConfig,
    ) -> Result<(), HistogramError> {
        let mut data = NamedTempFile::new()?;
        data.write_all(self.to_txt().as_bytes())?;
        data.flush()?;

        let mut script = NamedTempFile::new()?;
        script.write_all(plot_script(&data.path().display().to_string(), title).as_bytes())?;
        script.flush()?;

        log::debug!("running {} on {}", config.executable, script.path().display());
        let output = Command::new(&config.executable)
            .arg(script.path())
            .output()
            .map_err(|e| HistogramError::Gnuplot(format!("{}: {e}", config.executable)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(HistogramError::Gnuplot(format!(
                "{} exited with {}: {}",
                config.executable,
                output.status,
                stderr.trim()
            )));
        }

        log::debug!("writing PNG histogram to {}", path.as_ref().display());
        fs::write(path, output.stdout)?;
        Ok(())
    }
}

/// Returns the gnuplot script plotting the two-column data in `data_path`.
pub(crate) fn plot_script(data_path: &str, title: &str) -> String {
    let title = format!("{title} Population Growth");
    format!(
        "reset\n\
         set terminal png\n\
         set xlabel \"Years before present\"\n\
         set ylabel \"Population growth\"\n\
         set title \"{}\"\n\
         set key below\n\
         set grid\n\
         set xrange[] reverse\n\
         plot \"{data_path}\" using 1:2 title \"\" with linespoints\n",
        title.trim_start()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_script() {
        let script = plot_script("/tmp/data.txt", "U152");
        assert!(script.starts_with("reset\nset terminal png\n"));
        assert!(script.contains("set title \"U152 Population Growth\"\n"));
        assert!(script.contains("set xrange[] reverse\n"));
        assert!(script.ends_with("plot \"/tmp/data.txt\" using 1:2 title \"\" with linespoints\n"));
    }

    #[test]
    fn test_plot_script_without_title() {
        let script = plot_script("data", "");
        assert!(script.contains("set title \"Population Growth\"\n"));
    }
}
