use std::{
    io::{ErrorKind, Result},
    path::{Path, PathBuf},
};

/// Resolves `~`, `.` and `..` prefixes. Anything else is returned unchanged.
pub fn get_path(path: &str) -> Result<PathBuf> {
    let given = Path::new(path);

    let path = if let Ok(rest) = given.strip_prefix("~") {
        dirs::home_dir()
            .ok_or(std::io::Error::from(ErrorKind::NotFound))?
            .join(rest)
    } else if given.starts_with("..") {
        let mut current_dir = std::env::current_dir()?;
        let mut rest = given;

        while let Ok(stripped) = rest.strip_prefix("..") {
            current_dir = current_dir
                .parent()
                .ok_or(std::io::Error::from(ErrorKind::NotFound))?
                .to_path_buf();
            rest = stripped;
        }

        current_dir.join(rest)
    } else if let Ok(rest) = given.strip_prefix(".") {
        std::env::current_dir()?.join(rest)
    } else {
        given.to_path_buf()
    };

    Ok(path)
}
