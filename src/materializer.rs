//! Turns device configurations into finished project directories.
//!
//! For every device the materializer clears the previous output, copies the
//! template variant matching its attachment count, renames the variant's
//! project file and companion directory after the device, and renders the
//! target documents in place.

use crate::constants::{FILES_SUFFIX, TARGET_FILES};
use crate::error::{Error, Result};
use crate::files::{copy_dir, remove_dir_if_exists, rename_path};
use crate::model::{DeviceConfig, DeviceRegistry};
use crate::renderer::{render_file, TemplateRenderer};
use crate::variant::{variant, VARIANTS};
use log::{debug, info};
use std::ffi::OsString;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Generates project directories from a template library.
pub struct ProjectMaterializer<'a> {
    engine: &'a dyn TemplateRenderer,
    template_root: &'a Path,
    output_root: &'a Path,
    /// Inputs besides the template library that must survive cleanup
    protected: Vec<PathBuf>,
}

/// Returns true if `name` can be used as a single directory name.
pub fn is_valid_device_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(part)), None) if part == name
    )
}

/// Name of the companion directory of a project.
pub fn files_dir_name(project: &str) -> String {
    format!("{project}{FILES_SUFFIX}")
}

impl<'a> ProjectMaterializer<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        template_root: &'a Path,
        output_root: &'a Path,
    ) -> Self {
        Self {
            engine,
            template_root,
            output_root,
            protected: Vec::new(),
        }
    }

    /// Marks `path` as input that device cleanup must never remove.
    ///
    /// The template library and its variant directories are always protected.
    pub fn protect<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.protected.push(path.as_ref().to_path_buf());
        self
    }

    /// Directory generated for `device`.
    pub fn project_dir(&self, device: &DeviceConfig) -> PathBuf {
        self.output_root.join(&device.name)
    }

    /// Materializes every device in registry order, stopping at the first error.
    ///
    /// # Returns
    /// * `Result<Vec<PathBuf>>` - Generated project directories
    pub fn materialize_all(&self, registry: &DeviceRegistry) -> Result<Vec<PathBuf>> {
        registry.iter().map(|device| self.materialize(device)).collect()
    }

    /// Materializes a single device.
    ///
    /// Running it twice on the same device produces the same directory.
    ///
    /// # Errors
    /// * `Error::Materialize` wrapping the underlying failure
    pub fn materialize(&self, device: &DeviceConfig) -> Result<PathBuf> {
        self.try_materialize(device).map_err(|source| Error::Materialize {
            device: device.name.clone(),
            source: Box::new(source),
        })
    }

    fn try_materialize(&self, device: &DeviceConfig) -> Result<PathBuf> {
        if !is_valid_device_name(&device.name) {
            return Err(Error::InvalidDeviceName(device.name.clone()));
        }

        let project_dir = self.project_dir(device);
        self.ensure_not_protected(&project_dir)?;
        remove_dir_if_exists(&project_dir)?;

        let variant = variant(device.attachments.len())?;
        debug!(
            "Device '{}' has {} attachment(s), using {}",
            device.name,
            device.attachments.len(),
            variant
        );

        let template_dir = self.template_root.join(variant.as_str());
        if !template_dir.is_dir() {
            return Err(Error::MissingProjectArtifact {
                artifact: variant.to_string(),
                dir: self.template_root.to_path_buf(),
            });
        }
        copy_dir(&template_dir, &project_dir)?;

        let files_dir = rename_artifacts(&project_dir, variant.as_str(), &device.name)?;

        let context = serde_json::to_value(device)?;
        for target in TARGET_FILES {
            render_file(self.engine, files_dir.join(target), &context)?;
        }

        info!("Generated project for device '{}'", device.name);
        Ok(project_dir)
    }

    /// Fails if removing `project_dir` would delete the template library, a
    /// variant directory or any other protected input.
    fn ensure_not_protected(&self, project_dir: &Path) -> Result<()> {
        let target = resolve_path(project_dir);
        let inputs = std::iter::once(self.template_root.to_path_buf())
            .chain(VARIANTS.iter().map(|(_, id)| self.template_root.join(id.as_str())))
            .chain(self.protected.iter().cloned());

        for input in inputs {
            // inputs that do not exist cannot be removed
            let Ok(input) = fs::canonicalize(&input) else {
                continue;
            };
            if input.starts_with(&target) {
                return Err(Error::ProtectedPath(project_dir.to_path_buf()));
            }
        }
        Ok(())
    }
}

/// Absolute form of `path` with symlinks resolved for the part that exists.
fn resolve_path(path: &Path) -> PathBuf {
    if let Ok(resolved) = fs::canonicalize(path) {
        return resolved;
    }
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            resolve_path(parent).join(name)
        }
        _ => path.to_path_buf(),
    }
}

/// Renames `<variant>.<ext>` files and `<variant> Files` to device-named
/// equivalents and returns the renamed companion directory.
fn rename_artifacts(project_dir: &Path, variant: &str, device: &str) -> Result<PathBuf> {
    let files_from = project_dir.join(files_dir_name(variant));
    if !files_from.is_dir() {
        return Err(Error::MissingProjectArtifact {
            artifact: files_dir_name(variant),
            dir: project_dir.to_path_buf(),
        });
    }

    let mut project_files = Vec::new();
    for entry in fs::read_dir(project_dir)? {
        let path = entry?.path();
        if path.is_file() && path.file_stem().is_some_and(|stem| stem == variant) {
            project_files.push(path);
        }
    }
    if project_files.is_empty() {
        return Err(Error::MissingProjectArtifact {
            artifact: format!("{variant}.*"),
            dir: project_dir.to_path_buf(),
        });
    }

    for from in project_files {
        let mut file_name = OsString::from(device);
        if let Some(ext) = from.extension() {
            file_name.push(".");
            file_name.push(ext);
        }
        let to = project_dir.join(file_name);
        rename_path(&from, &to)?;
    }

    let files_to = project_dir.join(files_dir_name(device));
    rename_path(&files_from, &files_to)?;
    Ok(files_to)
}
