//! The admin console: forms, listing and notices wired to a [`VideoApi`].

use tracing::{error, info};
use uuid::Uuid;

use coursehub_core::result::AppResult;
use coursehub_entity::video::{Video, VideoType};

use crate::api::{CountsPayload, UploadRequest, VideoApi};
use crate::browser::VideoBrowser;
use crate::form::{EditForm, UploadForm};
use crate::query::VideoQuery;

const UPLOADED: &str = "Video uploaded successfully!";
const UPLOAD_FAILED: &str = "Failed to upload video. Please try again.";
const UPDATED: &str = "Video updated successfully!";
const UPDATE_FAILED: &str = "Failed to update video. Please try again.";
const DELETED: &str = "Video deleted successfully!";
const DELETE_FAILED: &str = "Failed to delete video. Please try again.";

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// The action went through.
    Success,
    /// The action was refused or failed.
    Error,
}

/// Message shown to the operator after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub kind: NoticeKind,
    /// Text.
    pub message: String,
}

impl Notice {
    fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    /// Whether this reports a success.
    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }
}

/// Video management console.
pub struct AdminConsole<A: VideoApi> {
    api: A,
    browser: VideoBrowser,
    upload: UploadForm,
    editing: Option<(Uuid, EditForm)>,
    notice: Option<Notice>,
}

impl<A: VideoApi> AdminConsole<A> {
    /// Console over `api`. Nothing is fetched until [`refresh`](Self::refresh).
    pub fn new(api: A) -> Self {
        Self {
            api,
            browser: VideoBrowser::new(),
            upload: UploadForm::default(),
            editing: None,
            notice: None,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn browser(&self) -> &VideoBrowser {
        &self.browser
    }

    /// Last notice.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Dismiss the current notice.
    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Fetch `query` and show it.
    pub async fn load(&mut self, query: VideoQuery) {
        let ticket = self.browser.begin(query);
        let outcome = self.api.list(self.browser.query()).await;
        self.browser.accept(ticket, outcome);
    }

    /// Fetch the current query again. Also serves as "try again".
    pub async fn refresh(&mut self) {
        let ticket = self.browser.reload();
        let outcome = self.api.list(self.browser.query()).await;
        self.browser.accept(ticket, outcome);
    }

    /// Jump to `page`, clamped to the available pages.
    pub async fn set_page(&mut self, page: u64) {
        let query = self.browser.go_to(page);
        self.load(query).await;
    }

    pub async fn set_page_size(&mut self, page_size: u64) {
        let query = self.browser.query().with_page_size(page_size);
        self.load(query).await;
    }

    pub async fn set_type(&mut self, video_type: Option<VideoType>) {
        let query = self.browser.query().with_type(video_type);
        self.load(query).await;
    }

    pub async fn set_search(&mut self, search: impl Into<String>) {
        let query = self.browser.query().with_search(search);
        self.load(query).await;
    }

    /// The upload form.
    pub fn upload_form(&self) -> &UploadForm {
        &self.upload
    }

    /// The upload form, for editing.
    pub fn upload_form_mut(&mut self) -> &mut UploadForm {
        &mut self.upload
    }

    /// Validate and send the upload form.
    ///
    /// On success the form is reset and the listing refreshed.
    pub async fn submit_upload(&mut self) -> Option<Video> {
        if let Err(message) = self.upload.validate() {
            self.notice = Some(Notice::error(message));
            return None;
        }
        let Some(file) = self.upload.file().cloned() else {
            return None;
        };
        let request = UploadRequest {
            fields: self.upload.fields(),
            file,
        };

        match self.api.upload(request).await {
            Ok(video) => {
                info!(id = %video.id, title = %video.title, "Video uploaded");
                self.notice = Some(Notice::success(UPLOADED));
                self.upload.reset();
                self.refresh().await;
                Some(video)
            }
            Err(e) => {
                error!(error = %e, "Video upload failed");
                self.notice = Some(Notice::error(UPLOAD_FAILED));
                None
            }
        }
    }

    /// Open the edit form for `video`.
    pub fn start_edit(&mut self, video: &Video) {
        self.editing = Some((video.id, EditForm::from_video(video)));
    }

    /// The open edit form.
    pub fn edit_form_mut(&mut self) -> Option<&mut EditForm> {
        self.editing.as_mut().map(|(_, form)| form)
    }

    /// Close the edit form without saving.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Validate and send the open edit form.
    pub async fn submit_edit(&mut self) -> Option<Video> {
        let (id, form) = self.editing.as_ref()?;
        if let Err(message) = form.validate() {
            self.notice = Some(Notice::error(message));
            return None;
        }
        let (id, changes) = (*id, form.changes());

        match self.api.update(id, &changes).await {
            Ok(video) => {
                info!(%id, "Video updated");
                self.notice = Some(Notice::success(UPDATED));
                self.editing = None;
                self.refresh().await;
                Some(video)
            }
            Err(e) => {
                error!(%id, error = %e, "Video update failed");
                self.notice = Some(Notice::error(UPDATE_FAILED));
                None
            }
        }
    }

    /// Delete a video and refresh the listing.
    pub async fn delete(&mut self, id: Uuid) -> bool {
        match self.api.delete(id).await {
            Ok(()) => {
                info!(%id, "Video deleted");
                self.notice = Some(Notice::success(DELETED));
                self.refresh().await;
                true
            }
            Err(e) => {
                error!(%id, error = %e, "Video delete failed");
                self.notice = Some(Notice::error(DELETE_FAILED));
                false
            }
        }
    }

    /// Notification badge counters.
    pub async fn counts(&self, user: Option<&str>) -> AppResult<CountsPayload> {
        self.api.counts(user).await
    }
}
