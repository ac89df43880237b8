pub mod stl;

#[derive(Debug)]
pub enum IoErrorType {
    File(std::io::Error),
    SerdeJson(serde_json::Error),
    SerdeYaml(serde_yaml::Error),
    TomlSer(toml::ser::Error),
    TomlDe(toml::de::Error),
    StringOnly(String),
}
impl std::fmt::Display for IoErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoErrorType::File(error) => write!(f, "- File IO Error:\n{}", error),
            IoErrorType::SerdeJson(error) => write!(f, "- JSON Serialization/Deserialization Error:\n{}", error),
            IoErrorType::SerdeYaml(error) => write!(f, "- YAML Serialization/Deserialization Error:\n{}", error),
            IoErrorType::TomlSer(error) => write!(f, "- TOML Serialization Error:\n{}", error),
            IoErrorType::TomlDe(error) => write!(f, "- TOML Deserialization Error:\n{}", error),
            IoErrorType::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}

/// Custom verbose IO error struct.
#[derive(Debug)]
pub struct IoError {
    /// Filepath facing an error (`None` for stdout).
    pub file: Option<String>,
    /// Error cause.
    pub cause: IoErrorType,
}
impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.file {
            Some(ref file) => write!(f, "- Error with file: {}\n- {}", file, self.cause),
            None => write!(f, "- {}", self.cause),
        }
    }
}

pub type IoResult<T> = std::result::Result<T, IoError>;

/// Config file formats understood by `read_cfg_file` and `cfg_to_string`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[clap(rename_all = "kebab_case")]
pub enum CfgFormat {
    Yaml,
    Json,
    Toml,
}
impl CfgFormat {
    /// Pick the config format from a file extension.
    pub fn from_path(path: &str) -> Option<Self> {
        match path.rsplit('.').next() {
            Some("json") => Some(CfgFormat::Json),
            Some("toml") => Some(CfgFormat::Toml),
            Some("yaml") | Some("yml") => Some(CfgFormat::Yaml),
            _ => None,
        }
    }
}

/// Open a file with verbose errors.
pub fn open(path: &str) -> IoResult<std::fs::File> {
    let file = match std::fs::File::open(path){
        Ok(file) => file,
        Err(error) => {
            return Err(IoError{file: Some(path.to_string()), cause: IoErrorType::File(error)});
        },
    };
    Ok(file)
}

/// Create a file with verbose errors.
pub fn create(path: &str) -> IoResult<std::fs::File> {
    let file = match std::fs::File::create(path){
        Ok(file) => file,
        Err(error) => {
            return Err(IoError{file: Some(path.to_string()), cause: IoErrorType::File(error)});
        },
    };
    Ok(file)
}

/// Read from string with verbose errors
pub fn read_to_string(path: &str) -> IoResult<String> {
    match std::fs::read_to_string(path){
        Ok(buffer) => Ok(buffer),
        Err(error) => {
            Err(IoError{file: Some(path.to_string()), cause: IoErrorType::File(error)})
        },
    }
}

/// Read in cfg files from the supported filetypes.
pub fn read_cfg_file<T>(path: &str) -> IoResult<T>
where T: serde::de::DeserializeOwned
{
    match CfgFormat::from_path(path) {
        Some(CfgFormat::Json) => {
            let cfg: T = match serde_json::from_reader(open(path)?) {
                Ok(cfg) => cfg,
                Err(error) => return Err(IoError{file: Some(path.to_string()), cause: IoErrorType::SerdeJson(error)}),
            };
            Ok(cfg)
        },
        Some(CfgFormat::Toml) => {
            let cfg: T = match toml::from_str(&read_to_string(path)?) {
                Ok(cfg) => cfg,
                Err(error) => return Err(IoError{file: Some(path.to_string()), cause: IoErrorType::TomlDe(error)}),
            };
            Ok(cfg)
        },
        Some(CfgFormat::Yaml) => {
            let cfg: T = match serde_yaml::from_reader(open(path)?) {
                Ok(cfg) => cfg,
                Err(error) => return Err(IoError{file: Some(path.to_string()), cause: IoErrorType::SerdeYaml(error)}),
            };
            Ok(cfg)
        },
        None => {
            let supported_filetypes = vec!["json", "toml", "yaml", "yml"];
            let error_string = format!("Unsupported filetype for config file: {}\nSupported filetypes: {:?}", path, supported_filetypes);
            Err(IoError{file: Some(path.to_string()), cause: IoErrorType::StringOnly(error_string)})
        },
    }
}

/// Serialize a cfg struct to a string in the given format.
pub fn cfg_to_string<T>(cfg: &T, format: CfgFormat) -> IoResult<String>
where T: serde::Serialize
{
    let result = match format {
        CfgFormat::Json => serde_json::to_string_pretty(cfg).map_err(IoErrorType::SerdeJson),
        CfgFormat::Toml => toml::to_string_pretty(cfg).map_err(IoErrorType::TomlSer),
        CfgFormat::Yaml => serde_yaml::to_string(cfg).map_err(IoErrorType::SerdeYaml),
    };
    result.map_err(|cause| IoError{file: None, cause})
}
