//! Profile repository: `User_Information` rows and profile pictures.

use chrono::Utc;
use mru_core::entities::UserProfile;
use mru_core::enums::{Field, Table};
use mru_core::updates::ProfileChange;
use mru_core::{MarketError, MarketResult, ValidationError, validate};

use crate::MarketClient;
use crate::query::Query;
use crate::repos::storage::image_content_type;

/// Validate every present column of `change` into a fresh record.
fn validated(change: &ProfileChange) -> Result<ProfileChange, ValidationError> {
    let mut clean = ProfileChange {
        profile_image: change.profile_image.clone(),
        ..ProfileChange::default()
    };
    if let Some(email) = &change.email {
        validate::email(&mut clean.email, email)?;
    }
    if let Some(user_name) = &change.user_name {
        validate::username(&mut clean.user_name, user_name)?;
    }
    if let Some(first_name) = &change.first_name {
        validate::first_name(&mut clean.first_name, first_name)?;
    }
    if let Some(last_name) = &change.last_name {
        validate::last_name(&mut clean.last_name, last_name)?;
    }
    Ok(clean)
}

/// Object name for a new profile picture: `{user}-{millis}.{ext}`.
fn picture_object_name(supabase_id: &str, file_name: &str) -> Result<String, ValidationError> {
    if !validate::is_image_path(file_name) {
        return Err(ValidationError::new(
            Field::Image,
            "Profile picture must be a png, jpg, gif, or webp image",
        ));
    }
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    Ok(format!(
        "{supabase_id}-{}.{ext}",
        Utc::now().timestamp_millis()
    ))
}

impl MarketClient {
    pub async fn profile(&self, supabase_id: &str) -> MarketResult<UserProfile> {
        self.fetch(
            Query::select(Table::UserInformation, "*")
                .eq("supabase_id", supabase_id)
                .single(),
        )
        .await
    }

    /// Apply the present columns of `change` to the user's profile.
    pub async fn update_profile(
        &self,
        supabase_id: &str,
        change: &ProfileChange,
    ) -> MarketResult<UserProfile> {
        let change = validated(change)?;
        if change.is_empty() {
            return Err(MarketError::from("No profile changes specified"));
        }
        self.fetch(
            Query::update(Table::UserInformation, &change)?
                .eq("supabase_id", supabase_id)
                .columns("*")
                .single(),
        )
        .await
    }

    /// Upload a new picture and point the profile at its public URL.
    pub async fn update_profile_picture(
        &self,
        supabase_id: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> MarketResult<UserProfile> {
        let object = picture_object_name(supabase_id, file_name)?;
        let bucket = self.storage().profile_bucket.clone();
        self.upload(&bucket, &object, bytes, image_content_type(file_name), true)
            .await?;
        let change = ProfileChange {
            profile_image: Some(Some(self.public_url(&bucket, &object))),
            ..ProfileChange::default()
        };
        self.update_profile(supabase_id, &change).await
    }

    /// Remove the profile's picture reference. The stored object is kept.
    pub async fn clear_profile_picture(&self, supabase_id: &str) -> MarketResult<UserProfile> {
        let change = ProfileChange {
            profile_image: Some(None),
            ..ProfileChange::default()
        };
        self.update_profile(supabase_id, &change).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picture_name_keeps_lowercased_extension() {
        let name = picture_object_name("uid-9", "Me.PNG").expect("image");
        assert!(name.starts_with("uid-9-"));
        assert!(name.ends_with(".png"));
    }

    #[test]
    fn picture_name_rejects_non_images() {
        let error = picture_object_name("uid-9", "notes.txt").expect_err("not an image");
        assert_eq!(error.field, Field::Image);
    }

    #[test]
    fn validated_change_checks_each_present_column() {
        let change = ProfileChange {
            email: Some("someone@gmail.com".into()),
            ..ProfileChange::default()
        };
        assert_eq!(validated(&change).expect_err("domain").field, Field::Email);

        let change = ProfileChange {
            first_name: Some("  Ada ".into()),
            ..ProfileChange::default()
        };
        assert_eq!(
            validated(&change).expect("valid").first_name.as_deref(),
            Some("Ada")
        );
    }
}
