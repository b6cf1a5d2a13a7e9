//! In-memory repositories and fixtures for service tests.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{Coordinate, Location, NewPhoto, PageCursor, Photo};
use crate::ports::{
    LocationRepository, PhotoRepository, Repos, RepositoryError, SearchItem,
};

#[derive(Debug, Clone)]
struct StoredLocation {
    coordinate: Coordinate,
    cursor: PageCursor,
}

#[derive(Debug, Default)]
struct State {
    next_location_id: i64,
    next_photo_id: i64,
    locations: BTreeMap<i64, StoredLocation>,
    photos: BTreeMap<i64, Photo>,
}

/// Both repositories over one shared map, with cascade on location delete.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn repos(self: &Arc<Self>) -> Repos {
        Repos::new(self.clone(), self.clone())
    }

    /// Seed a location with a cursor and `photo_count` photos.
    pub fn seed(&self, cursor: PageCursor, photo_count: usize) -> i64 {
        let mut state = self.state.lock().unwrap();
        state.next_location_id += 1;
        let id = state.next_location_id;
        state.locations.insert(
            id,
            StoredLocation {
                coordinate: Coordinate::new(10.0 + id as f64, 20.0),
                cursor,
            },
        );
        for n in 0..photo_count {
            state.next_photo_id += 1;
            let photo_id = state.next_photo_id;
            state.photos.insert(
                photo_id,
                Photo {
                    id: photo_id,
                    location_id: id,
                    title: format!("seed {n}"),
                    source_url: format!("http://x/seed-{id}-{n}.jpg"),
                    created_at: Utc::now(),
                },
            );
        }
        id
    }

    pub fn photo_count(&self, location_id: i64) -> usize {
        let state = self.state.lock().unwrap();
        state
            .photos
            .values()
            .filter(|p| p.location_id == location_id)
            .count()
    }

    pub fn cursor(&self, location_id: i64) -> Option<PageCursor> {
        let state = self.state.lock().unwrap();
        state.locations.get(&location_id).map(|l| l.cursor)
    }

    fn to_location(state: &State, id: i64, stored: &StoredLocation) -> Location {
        let photo_count = state
            .photos
            .values()
            .filter(|p| p.location_id == id)
            .count();
        Location {
            id,
            coordinate: stored.coordinate,
            cursor: stored.cursor,
            photo_count: u32::try_from(photo_count).unwrap(),
            created_at: Utc::now(),
        }
    }
}

#[async_trait]
impl LocationRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Location>, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .locations
            .iter()
            .map(|(id, l)| Self::to_location(&state, *id, l))
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Location, RepositoryError> {
        let state = self.state.lock().unwrap();
        state
            .locations
            .get(&id)
            .map(|l| Self::to_location(&state, id, l))
            .ok_or_else(|| RepositoryError::NotFound(format!("location {id}")))
    }

    async fn find_by_coordinate(
        &self,
        coordinate: Coordinate,
    ) -> Result<Option<Location>, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .locations
            .iter()
            .find(|(_, l)| l.coordinate == coordinate)
            .map(|(id, l)| Self::to_location(&state, *id, l)))
    }

    async fn insert(&self, coordinate: Coordinate) -> Result<Location, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        if state.locations.values().any(|l| l.coordinate == coordinate) {
            return Err(RepositoryError::AlreadyExists(coordinate.to_string()));
        }
        state.next_location_id += 1;
        let id = state.next_location_id;
        let stored = StoredLocation {
            coordinate,
            cursor: PageCursor::INITIAL,
        };
        state.locations.insert(id, stored.clone());
        Ok(Self::to_location(&state, id, &stored))
    }

    async fn replace_page(
        &self,
        id: i64,
        cursor: PageCursor,
        photos: &[NewPhoto],
    ) -> Result<Vec<Photo>, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let Some(location) = state.locations.get_mut(&id) else {
            return Err(RepositoryError::NotFound(format!("location {id}")));
        };
        location.cursor = cursor;
        state.photos.retain(|_, p| p.location_id != id);

        let mut inserted = Vec::with_capacity(photos.len());
        for new in photos {
            state.next_photo_id += 1;
            let photo = Photo {
                id: state.next_photo_id,
                location_id: id,
                title: new.title.clone(),
                source_url: new.source_url.clone(),
                created_at: Utc::now(),
            };
            state.photos.insert(photo.id, photo.clone());
            inserted.push(photo);
        }
        Ok(inserted)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().unwrap();
        if state.locations.remove(&id).is_none() {
            return Err(RepositoryError::NotFound(format!("location {id}")));
        }
        state.photos.retain(|_, p| p.location_id != id);
        Ok(())
    }
}

#[async_trait]
impl PhotoRepository for InMemoryStore {
    async fn list_for_location(&self, location_id: i64) -> Result<Vec<Photo>, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .photos
            .values()
            .filter(|p| p.location_id == location_id)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Photo, RepositoryError> {
        let state = self.state.lock().unwrap();
        state
            .photos
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("photo {id}")))
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().unwrap();
        state
            .photos
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(format!("photo {id}")))
    }

    async fn delete_for_location(&self, location_id: i64) -> Result<Vec<Photo>, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let removed: Vec<Photo> = state
            .photos
            .values()
            .filter(|p| p.location_id == location_id)
            .cloned()
            .collect();
        state.photos.retain(|_, p| p.location_id != location_id);
        Ok(removed)
    }
}

/// `count` search items named after `page`.
pub fn items(page: u32, count: usize) -> Vec<SearchItem> {
    (0..count)
        .map(|n| SearchItem::new(format!("p{page} #{n}"), format!("http://x/p{page}-{n}.jpg")))
        .collect()
}
