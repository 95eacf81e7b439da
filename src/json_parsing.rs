use{
    std::{
        fs::File,
        io::BufReader,
        path::Path,
        process::exit
    },
    serde::{Serialize, de::DeserializeOwned},
    serde_json::Value,
    crate::error::SimError,
};

/// Reads the parameters from `file`. Without a file the default
/// parameters are printed as an example and the program exits.
pub fn parse<P, T>(file: Option<P>) -> Result<(T, Value), SimError>
where P: AsRef<Path>,
    T: Default + Serialize + DeserializeOwned
{
    match file
    {
        None => {
            let example = T::default();
            serde_json::to_writer_pretty(std::io::stdout(), &example)?;
            println!();
            exit(0)
        },
        Some(file) => read_params(file)
    }
}

pub fn read_params<P, T>(file: P) -> Result<(T, Value), SimError>
where P: AsRef<Path>,
    T: DeserializeOwned
{
    let path = file.as_ref();
    let f = File::open(path)
        .map_err(|e| SimError::io(path, e))?;
    let json_val: Value = serde_json::from_reader(BufReader::new(f))?;
    let opt: T = serde_json::from_value(json_val.clone())?;
    Ok((opt, json_val))
}
