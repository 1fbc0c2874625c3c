use std::path::PathBuf;

/// Image backend used for the charts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

/// Where and how the charts are rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotConfig {
    pub out_dir: PathBuf,
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("target/plots"),
            width: 1200,
            height: 700,
            format: ImageFormat::Png,
        }
    }
}

impl PlotConfig {
    pub fn output_path(&self, file_stem: &str) -> PathBuf {
        self.out_dir.join(format!("{}.{}", file_stem, self.format.extension()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn output_path() {
        let mut config = PlotConfig::default();
        assert_eq!(config.output_path("p_vs_m"), Path::new("target/plots/p_vs_m.png"));
        config.format = ImageFormat::Svg;
        config.out_dir = PathBuf::from("/tmp/charts");
        assert_eq!(config.output_path("p_vs_k"), Path::new("/tmp/charts/p_vs_k.svg"));
    }
}
