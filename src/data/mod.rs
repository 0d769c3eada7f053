//! Entity files and objects

pub mod models;

use models::*;

api_calls! {
    fn abort_file_uploads("/File/AbortFileUploads", EntityToken): AbortFileUploadsRequest => AbortFileUploadsResponse;

    fn delete_files("/File/DeleteFiles", EntityToken): DeleteFilesRequest => DeleteFilesResponse;

    fn finalize_file_uploads("/File/FinalizeFileUploads", EntityToken): FinalizeFileUploadsRequest => FinalizeFileUploadsResponse;

    fn get_files("/File/GetFiles", EntityToken): GetFilesRequest => GetFilesResponse;

    /// Get upload URLs for the files
    ///
    /// Uploading itself is done outside of the API, then call
    /// `finalize_file_uploads` to commit the files.
    fn initiate_file_uploads("/File/InitiateFileUploads", EntityToken): InitiateFileUploadsRequest => InitiateFileUploadsResponse;

    fn get_objects("/Object/GetObjects", EntityToken): GetObjectsRequest => GetObjectsResponse;

    /// Set objects, or delete the ones with `DeletionRequested` flag
    fn set_objects("/Object/SetObjects", EntityToken): SetObjectsRequest => SetObjectsResponse;
}
