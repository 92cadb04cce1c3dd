use super::model;
use crate::shared::components::Notice;
use crate::shared::state::FormStateStore;
use crate::system::auth::ApiCredentials;
use contracts::domain::a001_project::form::{field, section};
use contracts::domain::a001_project::limits::{
    rejection_notice, remaining_slots, select_screenshots, ScreenshotCandidate,
};
use contracts::domain::a001_project::{
    hydrate_record, initial_record, validate_record, ProjectPayload, ProjectSlug,
};
use leptos::prelude::*;
use web_sys::File;

/// Which request the form submits
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update { slug: ProjectSlug },
}

/// ViewModel for the project create/update form
#[derive(Clone)]
pub struct ProjectDetailsViewModel {
    pub mode: FormMode,
    pub store: FormStateStore,
    pub notice: RwSignal<Option<Notice>>,
    pub loading: RwSignal<bool>,
    pub submitting: RwSignal<bool>,
    /// Screenshot URLs already stored by the CMS that the update keeps
    pub existing_screenshots: RwSignal<Vec<String>>,
    /// Files picked for upload with the next submit
    pub new_screenshots: RwSignal<Vec<File>, LocalStorage>,
    credentials: ApiCredentials,
}

impl ProjectDetailsViewModel {
    pub fn new(mode: FormMode, credentials: ApiCredentials) -> Self {
        Self {
            mode,
            store: FormStateStore::new(initial_record()),
            notice: RwSignal::new(None),
            loading: RwSignal::new(false),
            submitting: RwSignal::new(false),
            existing_screenshots: RwSignal::new(Vec::new()),
            new_screenshots: RwSignal::new_local(Vec::new()),
            credentials,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        matches!(self.mode, FormMode::Update { .. })
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit_mode() {
            "Edit Project"
        } else {
            "Create Project"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_edit_mode() {
            "Update Project"
        } else {
            "Create Project"
        }
    }

    /// Load the persisted project into the store when editing
    pub fn load_if_needed(&self) {
        let FormMode::Update { slug } = self.mode.clone() else {
            return;
        };
        let store = self.store;
        let notice = self.notice;
        let loading = self.loading;
        let existing = self.existing_screenshots;
        let credentials = self.credentials.clone();

        loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_by_slug(&credentials, &slug).await {
                Ok(project) => {
                    log::debug!("hydrating project form for '{}'", slug);
                    store.replace_record(hydrate_record(&project));
                    existing.set(project.screenshot_urls().to_vec());
                }
                Err(e) => {
                    log::error!("Error fetching project '{}': {}", slug, e);
                    notice.set(Some(Notice::error(e)));
                }
            }
            loading.set(false);
        });
    }

    /// The slug typed into the form still addresses the loaded project
    fn slug_unchanged(&self) -> bool {
        match &self.mode {
            FormMode::Update { slug } => self
                .store
                .record_untracked()
                .text(section::BASIC_INFO, field::SLUG)
                .map(|typed| typed.trim() == slug.as_str())
                .unwrap_or(false),
            FormMode::Create => false,
        }
    }

    /// Screenshots attached to the next submit, kept and new
    pub fn attached_screenshots(&self) -> usize {
        self.existing_screenshots.with_untracked(Vec::len)
            + self.new_screenshots.with_untracked(Vec::len)
    }

    /// Apply the screenshot policy to freshly picked files
    pub fn add_screenshots(&self, picked: Vec<File>) {
        if picked.is_empty() {
            return;
        }
        let attached = self.attached_screenshots();
        let candidates: Vec<ScreenshotCandidate> = picked
            .iter()
            .map(|file| ScreenshotCandidate {
                name: file.name(),
                mime: file.type_(),
                size: file.size(),
            })
            .collect();

        let selection = select_screenshots(&candidates, attached);
        if selection.rejected {
            self.notice.set(Some(Notice::error(rejection_notice(
                remaining_slots(attached),
            ))));
        }
        let accepted: Vec<File> = selection
            .accepted
            .into_iter()
            .filter_map(|i| picked.get(i).cloned())
            .collect();
        self.new_screenshots.update(|files| files.extend(accepted));
    }

    pub fn remove_new_screenshot(&self, index: usize) {
        self.new_screenshots.update(|files| {
            if index < files.len() {
                files.remove(index);
            }
        });
    }

    pub fn remove_existing_screenshot(&self, url: &str) {
        self.existing_screenshots
            .update(|urls| urls.retain(|existing| existing != url));
    }

    /// Validate the record and send it with the picked screenshots
    pub fn save_command(&self) {
        if self.submitting.get_untracked() {
            return;
        }
        let record = self.store.record_untracked();
        if let Err(message) = validate_record(&record) {
            self.notice.set(Some(Notice::error(message)));
            return;
        }

        let mode = self.mode.clone();
        let payload = match &mode {
            FormMode::Create => ProjectPayload::for_create(record),
            FormMode::Update { .. } => {
                ProjectPayload::for_update(record, self.existing_screenshots.get_untracked())
            }
        };
        let files = self.new_screenshots.get_untracked();
        let vm = self.clone();

        vm.submitting.set(true);
        vm.notice.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            let result = match &mode {
                FormMode::Create => model::create_project(&vm.credentials, &payload, &files).await,
                FormMode::Update { slug } => {
                    model::update_project(&vm.credentials, slug, &payload, &files).await
                }
            };
            match result {
                Ok(()) => {
                    vm.new_screenshots.set(Vec::new());
                    if vm.is_edit_mode() {
                        vm.notice
                            .set(Some(Notice::success("Project updated successfully!")));
                        // Uploaded files now live on the CMS; pick up their URLs.
                        if vm.slug_unchanged() {
                            vm.load_if_needed();
                        }
                    } else {
                        vm.store.replace_record(initial_record());
                        vm.notice
                            .set(Some(Notice::success("Project created successfully!")));
                    }
                }
                Err(e) => {
                    log::error!("Error submitting project: {}", e);
                    vm.notice.set(Some(Notice::error(e)));
                }
            }
            vm.submitting.set(false);
        });
    }
}
