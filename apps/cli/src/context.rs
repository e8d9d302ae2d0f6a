#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
	Human,
	Json,
}

#[derive(Debug, Clone)]
pub struct Context {
	pub format: OutputFormat,
	/// Print every tag, not just the device and GPS summary
	pub show_all: bool,
}

impl Context {
	pub fn new(format: OutputFormat) -> Self {
		Self {
			format,
			show_all: false,
		}
	}

	pub fn with_show_all(mut self, show_all: bool) -> Self {
		self.show_all = show_all;
		self
	}

	pub fn is_human(&self) -> bool {
		self.format == OutputFormat::Human
	}
}
