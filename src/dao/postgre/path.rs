use std::path::PathBuf;

/// `{dir}/migration/postgresql/{file}`
pub fn get_path(dir: &str, file: &str) -> PathBuf {
    let mut buf = PathBuf::new();

    for chunk in [dir, "migration", "postgresql", file] {
        buf.push(chunk);
    }

    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_path() {
        let path = get_path("/srv/etl", "entity.sql");
        assert_eq!(
            path.to_string_lossy(),
            "/srv/etl/migration/postgresql/entity.sql"
        );
    }
}
