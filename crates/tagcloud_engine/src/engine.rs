use std::fs;
use std::path::Path;

use cloud_logging::{cloud_debug, cloud_info, cloud_warn};
use tagcloud_core::build_tag_cloud;

use crate::input::{read_input, InputText};
use crate::manifest::{manifest_path_for, Manifest};
use crate::persist::write_atomically;
use crate::render::{CloudRenderer, HtmlCloudRenderer};
use crate::{OutputRequest, RunError, RunReport};

/// Drives one run: count an input, then render and write its cloud.
pub struct CloudEngine {
    renderer: Box<dyn CloudRenderer>,
}

impl CloudEngine {
    pub fn new(renderer: Box<dyn CloudRenderer>) -> Self {
        Self { renderer }
    }

    pub fn with_stylesheets(stylesheets: Vec<String>) -> Self {
        Self::new(Box::new(HtmlCloudRenderer::new(stylesheets)))
    }

    pub fn load(&self, input: &Path) -> Result<InputText, RunError> {
        Ok(read_input(input)?)
    }

    /// Builds the cloud for `request.count` words and writes it out.
    ///
    /// Everything is rendered and serialized before the first write. The
    /// manifest, when requested, is written before the page, and removed again
    /// if the page cannot be written, so an existing page always belongs to a
    /// completed run.
    pub fn generate(
        &self,
        input: &InputText,
        request: &OutputRequest,
    ) -> Result<RunReport, RunError> {
        let cloud = build_tag_cloud(&input.counts, request.count)?;
        cloud_debug!(
            "Selected {} of {} distinct words",
            cloud.words.len(),
            input.distinct_words()
        );

        let page = self.renderer.render(&input.source_name(), &cloud);
        let manifest = if request.write_manifest {
            let json = Manifest::new(input, &cloud, &request.generated_utc).to_json()?;
            Some((manifest_path_for(&request.output), json))
        } else {
            None
        };

        let manifest_path = match &manifest {
            Some((path, json)) => {
                let path = write_atomically(path, json)?;
                cloud_info!("Wrote manifest to {:?}", path);
                Some(path)
            }
            None => None,
        };

        let output_path = match write_atomically(&request.output, &page) {
            Ok(path) => path,
            Err(err) => {
                if let Some(path) = &manifest_path {
                    if let Err(remove_err) = fs::remove_file(path) {
                        cloud_warn!("Failed to remove manifest {:?}: {}", path, remove_err);
                    }
                }
                return Err(err.into());
            }
        };
        cloud_info!("Wrote tag cloud to {:?}", output_path);

        Ok(RunReport {
            output_path,
            manifest_path,
            words_rendered: cloud.words.len(),
            distinct_words: input.distinct_words(),
            total_words: input.counts.total_words(),
        })
    }

    /// Non-interactive run: load then generate.
    pub fn run(&self, input: &Path, request: &OutputRequest) -> Result<RunReport, RunError> {
        let text = self.load(input)?;
        self.generate(&text, request)
    }
}

impl Default for CloudEngine {
    fn default() -> Self {
        Self::new(Box::new(HtmlCloudRenderer::default()))
    }
}
