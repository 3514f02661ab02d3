use super::bru_converter_models::{BrunoMetadata, ConvertConfig, FolderEntries};
use crate::core::error::BruError;
use crate::core::logger::Logger;
use crate::core::paths::{clean_path, dir_base_name, is_hidden};
use crate::postman::mapper::RequestMapper;
use crate::postman::models::{Collection, Info, Item, Variable, SCHEMA_V2_1};
use crate::syntax::environment::environment_path;
use crate::syntax::keywords::{
    BRU_EXTENSION, COLLECTION_DESCRIPTOR, COLLECTION_METADATA, ENVIRONMENTS_DIR,
    FOLDER_DESCRIPTOR,
};
use crate::syntax::{parse_environment_file, Auth, BruFile, KeyValue};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub struct BruConverter {
    config: ConvertConfig,
}

impl BruConverter {
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<Collection, BruError> {
        let root = self.config.input.as_path();
        if !root.exists() {
            return Err(BruError::DirectoryNotFound(clean_path(root)));
        }
        if !root.is_dir() {
            return Err(BruError::NotADirectory(clean_path(root)));
        }

        let name = collection_name(root);
        Logger::debug(&format!("Collection name: {name}"));

        let collection = load_descriptor(&root.join(COLLECTION_DESCRIPTOR));
        let root_auth = collection
            .as_ref()
            .map(|c| c.auth.resolve(&Auth::None))
            .unwrap_or_default();
        let collection_vars = collection.map(|c| c.vars).unwrap_or_default();
        let variable = self.seed_variables(root, &collection_vars);

        let mapper = RequestMapper::new(&self.config.remove);
        let mut item = Vec::new();

        for dir in self.top_level_folders(root)? {
            let Some(folder) = self.visit_folder(&dir, &root_auth, &mapper) else {
                continue;
            };
            if self.config.keep_folders {
                item.push(folder);
            } else {
                item.extend(folder.item);
            }
        }

        Ok(Collection {
            info: Info {
                name,
                description: Some(export_description()),
                schema: SCHEMA_V2_1.to_string(),
            },
            item,
            variable,
        })
    }

    /// Environment values first, then `replace` entries (overriding in place),
    /// then collection variables not already present.
    fn seed_variables(&self, root: &Path, collection_vars: &[KeyValue]) -> Vec<Variable> {
        let mut variables: Vec<Variable> = match &self.config.environment {
            Some(env) => {
                let path = environment_path(root, env);
                match parse_environment_file(&path) {
                    Ok(vars) => {
                        self.report(&format!("Loaded environment: {env}"));
                        vars.iter().map(|(k, v)| Variable::new(k, v)).collect()
                    }
                    Err(e) => {
                        Logger::warn(&format!("Environment '{env}' not loaded: {e}"));
                        Vec::new()
                    }
                }
            }
            None => Vec::new(),
        };

        for (key, value) in &self.config.replace {
            match variables.iter_mut().find(|v| &v.key == key) {
                Some(existing) => existing.value = value.clone(),
                None => variables.push(Variable::new(key, value)),
            }
        }

        for var in collection_vars {
            if !variables.iter().any(|v| v.key == var.key) {
                variables.push(Variable::new(&var.key, &var.value));
            }
        }

        variables
    }

    fn top_level_folders(&self, root: &Path) -> Result<Vec<PathBuf>, BruError> {
        if !self.config.folders.is_empty() {
            let mut dirs = Vec::new();
            for name in &self.config.folders {
                let path = root.join(name);
                if path.is_dir() {
                    dirs.push(path);
                } else {
                    Logger::warn(&format!(
                        "Folder '{name}' not found in {}, skipping",
                        clean_path(root)
                    ));
                }
            }
            return Ok(dirs);
        }

        let entries = read_entries(root).map_err(|source| BruError::FileRead {
            path: clean_path(root),
            source,
        })?;
        Ok(entries
            .dirs
            .into_iter()
            .filter(|d| entry_name(d) != ENVIRONMENTS_DIR)
            .collect())
    }

    fn visit_folder(&self, dir: &Path, inherited: &Auth, mapper: &RequestMapper) -> Option<Item> {
        self.report(&format!("Scanning folder: {}", clean_path(dir)));

        let entries = match read_entries(dir) {
            Ok(entries) => entries,
            Err(e) => {
                Logger::warn(&format!("Cannot read folder {}: {e}", clean_path(dir)));
                return None;
            }
        };

        let descriptor = load_descriptor(&dir.join(FOLDER_DESCRIPTOR));
        let folder_auth = match &descriptor {
            Some(d) => d.auth.resolve(inherited),
            None => inherited.clone(),
        };

        let mut children = Vec::new();
        for sub in &entries.dirs {
            children.extend(self.visit_folder(sub, &folder_auth, mapper));
        }
        for file in &entries.files {
            children.extend(self.visit_file(file, &folder_auth, mapper));
        }

        if children.is_empty() {
            crate::debug_log!("Pruning empty folder {}", clean_path(dir));
            return None;
        }

        let mut folder = Item::folder(&entry_name(dir), children);
        if let Some(d) = descriptor {
            folder.description = Some(d.docs).filter(|docs| !docs.is_empty());
            folder.variable = d
                .vars
                .iter()
                .map(|v| Variable::new(&v.key, &v.value))
                .collect();
        }
        Some(folder)
    }

    fn visit_file(&self, path: &Path, auth: &Auth, mapper: &RequestMapper) -> Option<Item> {
        let bru = match BruFile::from_path(path) {
            Ok(bru) => bru,
            Err(e) => {
                Logger::warn(&e.to_string());
                return None;
            }
        };
        let name = bru.display_name();

        if let Some(pattern) = self
            .config
            .ignore
            .iter()
            .find(|p| !p.is_empty() && name.contains(p.as_str()))
        {
            self.report(&format!(
                "[SKIP] Skipped: {name} (matches ignore pattern '{pattern}')"
            ));
            return None;
        }

        match mapper.map(&bru, auth) {
            Ok(item) => {
                self.report(&format!("[OK] Exported: {name}"));
                Some(item)
            }
            Err(veto) => {
                self.report(&format!("[SKIP] Skipped: {name} ({veto})"));
                None
            }
        }
    }

    fn report(&self, message: &str) {
        if self.config.verbose {
            println!("{message}");
        }
    }
}

/// `name` from `bruno.json` when present and non-empty, else the root's base name.
pub fn collection_name(root: &Path) -> String {
    let metadata = fs::read_to_string(root.join(COLLECTION_METADATA))
        .ok()
        .and_then(|content| match serde_json::from_str::<BrunoMetadata>(&content) {
            Ok(meta) => Some(meta),
            Err(e) => {
                crate::debug_log!("Ignoring invalid {COLLECTION_METADATA}: {e}");
                None
            }
        });

    metadata
        .map(|m| m.name)
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| dir_base_name(root))
}

fn export_description() -> String {
    chrono::Local::now()
        .format("Exported on %Y-%m-%d %H:%M:%S")
        .to_string()
}

fn load_descriptor(path: &Path) -> Option<BruFile> {
    if !path.is_file() {
        return None;
    }
    match BruFile::from_path(path) {
        Ok(bru) => Some(bru),
        Err(e) => {
            Logger::warn(&e.to_string());
            None
        }
    }
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Visible subdirectories and endpoint files of `dir`, each sorted by name.
/// Descriptor files are never endpoints. Links to directories are not followed.
fn read_entries(dir: &Path) -> io::Result<FolderEntries> {
    let mut dirs = Vec::new();
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let (path, file_type) = match entry.and_then(|e| Ok((e.path(), e.file_type()?))) {
            Ok(pair) => pair,
            Err(e) => {
                Logger::warn(&format!("Skipping entry in {}: {e}", clean_path(dir)));
                continue;
            }
        };
        let name = entry_name(&path);
        if is_hidden(&name) {
            continue;
        }
        if file_type.is_dir() {
            dirs.push(path);
        } else if file_type.is_symlink() && path.is_dir() {
            crate::debug_log!("Not following directory link {}", clean_path(&path));
        } else if path.extension().is_some_and(|ext| ext == BRU_EXTENSION)
            && name != FOLDER_DESCRIPTOR
            && name != COLLECTION_DESCRIPTOR
        {
            files.push(path);
        }
    }

    dirs.sort();
    files.sort();
    Ok(FolderEntries { dirs, files })
}
