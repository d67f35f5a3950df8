//! Entry point for callers of the room core.
//!
//! `ChatService` wires the in-memory repositories, a clock and the broadcast
//! publisher, and builds the matching use case for each call. Callers pass an
//! already-authenticated [`UserId`]; raw names and usernames are validated
//! into value objects here.

use std::sync::Arc;

use agora_shared::logger::setup_logger;
use tokio::sync::broadcast;

use crate::{
    config::{ChatConfig, ConfigError},
    domain::{
        ChatMessage, Clock, DomainEvent, ProfileId, ProfileInfo, RoomId, RoomInfo, RoomName,
        RoomStats, UserId, Username,
    },
    infrastructure::{
        BroadcastEventPublisher, InMemoryProfileRepository, InMemoryRoomRepository, SystemClock,
    },
    usecase::{
        AddAdminUseCase, CreateRoomUseCase, DeleteMessageUseCase, JoinRoomUseCase,
        LeaveRoomUseCase, ProfileQueryUseCase, RegisterUserUseCase, RemoveAdminUseCase,
        RoomCommandContext, RoomQueryUseCase, SendMessageUseCase, TransferRoomUseCase,
        UpdateUsernameUseCase, UseCaseError,
    },
};

/// Shared application state for the room core
pub struct ChatService {
    rooms: Arc<InMemoryRoomRepository>,
    profiles: Arc<InMemoryProfileRepository>,
    clock: Arc<dyn Clock>,
    publisher: Arc<BroadcastEventPublisher>,
}

impl ChatService {
    /// Build a service using the system clock
    pub fn new(config: &ChatConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Build a service with a custom time source
    pub fn with_clock(config: &ChatConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            rooms: Arc::new(InMemoryRoomRepository::new()),
            profiles: Arc::new(InMemoryProfileRepository::new()),
            clock,
            publisher: Arc::new(BroadcastEventPublisher::new(config.event_capacity)),
        }
    }

    /// Load configuration from the environment, install the logger and build a service
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = ChatConfig::from_env()?;
        setup_logger(env!("CARGO_PKG_NAME"), &config.log_level);
        tracing::info!(event_capacity = config.event_capacity, "Chat service starting");
        Ok(Self::new(&config))
    }

    /// Attach an observer to the domain event stream
    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.publisher.subscribe()
    }

    fn room_context(&self) -> RoomCommandContext {
        RoomCommandContext::new(self.rooms.clone(), self.clock.clone(), self.publisher.clone())
    }

    // ----- profiles -----

    pub async fn register(
        &self,
        caller: &UserId,
        username: &str,
    ) -> Result<(ProfileId, DomainEvent), UseCaseError> {
        let username = Username::new(username.to_string())?;
        RegisterUserUseCase::new(self.profiles.clone(), self.clock.clone(), self.publisher.clone())
            .execute(caller.clone(), username)
            .await
    }

    pub async fn update_username(
        &self,
        caller: &UserId,
        profile_id: &ProfileId,
        new_username: &str,
    ) -> Result<(), UseCaseError> {
        let new_username = Username::new(new_username.to_string())?;
        UpdateUsernameUseCase::new(self.profiles.clone(), self.clock.clone())
            .execute(profile_id, caller, new_username)
            .await
    }

    pub async fn profile_info(&self, profile_id: &ProfileId) -> Result<ProfileInfo, UseCaseError> {
        ProfileQueryUseCase::new(self.profiles.clone())
            .get_info(profile_id)
            .await
    }

    // ----- room lifecycle -----

    pub async fn create_room(
        &self,
        caller: &UserId,
        name: &str,
    ) -> Result<(RoomId, DomainEvent), UseCaseError> {
        let name = RoomName::new(name.to_string())?;
        CreateRoomUseCase::new(self.rooms.clone(), self.clock.clone(), self.publisher.clone())
            .execute(caller.clone(), name)
            .await
    }

    /// Hand storage custody to `new_custodian`; ownership is unaffected
    pub async fn transfer(
        &self,
        room_id: &RoomId,
        new_custodian: &UserId,
    ) -> Result<(), UseCaseError> {
        TransferRoomUseCase::new(self.rooms.clone())
            .execute(room_id, new_custodian.clone())
            .await
    }

    // ----- membership -----

    pub async fn join(&self, caller: &UserId, room_id: &RoomId) -> Result<DomainEvent, UseCaseError> {
        JoinRoomUseCase::new(self.room_context())
            .execute(room_id, caller.clone())
            .await
    }

    pub async fn leave(&self, caller: &UserId, room_id: &RoomId) -> Result<DomainEvent, UseCaseError> {
        LeaveRoomUseCase::new(self.room_context())
            .execute(room_id, caller.clone())
            .await
    }

    pub async fn add_admin(
        &self,
        caller: &UserId,
        room_id: &RoomId,
        target: &UserId,
    ) -> Result<DomainEvent, UseCaseError> {
        AddAdminUseCase::new(self.room_context())
            .execute(room_id, caller.clone(), target.clone())
            .await
    }

    pub async fn remove_admin(
        &self,
        caller: &UserId,
        room_id: &RoomId,
        target: &UserId,
    ) -> Result<DomainEvent, UseCaseError> {
        RemoveAdminUseCase::new(self.room_context())
            .execute(room_id, caller.clone(), target.clone())
            .await
    }

    // ----- message log -----

    pub async fn send_message(
        &self,
        caller: &UserId,
        room_id: &RoomId,
        content: &str,
    ) -> Result<DomainEvent, UseCaseError> {
        SendMessageUseCase::new(self.room_context())
            .execute(room_id, caller.clone(), content.to_string())
            .await
    }

    pub async fn delete_message(
        &self,
        caller: &UserId,
        room_id: &RoomId,
        message_id: u64,
    ) -> Result<DomainEvent, UseCaseError> {
        DeleteMessageUseCase::new(self.room_context())
            .execute(room_id, caller.clone(), message_id)
            .await
    }

    // ----- reads -----

    fn rooms_query(&self) -> RoomQueryUseCase {
        RoomQueryUseCase::new(self.rooms.clone())
    }

    pub async fn get_messages(
        &self,
        room_id: &RoomId,
        start: u64,
        limit: u64,
    ) -> Result<Vec<ChatMessage>, UseCaseError> {
        self.rooms_query().get_messages(room_id, start, limit).await
    }

    pub async fn get_message(
        &self,
        room_id: &RoomId,
        message_id: u64,
    ) -> Result<ChatMessage, UseCaseError> {
        self.rooms_query().get_message(room_id, message_id).await
    }

    pub async fn room_info(&self, room_id: &RoomId) -> Result<RoomInfo, UseCaseError> {
        self.rooms_query().room_info(room_id).await
    }

    pub async fn room_stats(&self, room_id: &RoomId) -> Result<RoomStats, UseCaseError> {
        self.rooms_query().room_stats(room_id).await
    }

    pub async fn is_member(&self, room_id: &RoomId, user: &UserId) -> Result<bool, UseCaseError> {
        self.rooms_query().is_member(room_id, user).await
    }

    pub async fn is_admin(&self, room_id: &RoomId, user: &UserId) -> Result<bool, UseCaseError> {
        self.rooms_query().is_admin(room_id, user).await
    }

    pub async fn members(&self, room_id: &RoomId) -> Result<Vec<UserId>, UseCaseError> {
        self.rooms_query().members(room_id).await
    }

    pub async fn admins(&self, room_id: &RoomId) -> Result<Vec<UserId>, UseCaseError> {
        self.rooms_query().admins(room_id).await
    }

    pub async fn custodian(&self, room_id: &RoomId) -> Result<UserId, UseCaseError> {
        self.rooms_query().custodian(room_id).await
    }
}
