//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! 外部の呼び出し元（ChatService）から呼び出され、Domain 層を操作します。

pub mod add_admin;
pub mod context;
pub mod create_room;
pub mod delete_message;
pub mod error;
pub mod join_room;
pub mod leave_room;
pub mod query_profile;
pub mod query_room;
pub mod register_user;
pub mod remove_admin;
pub mod send_message;
pub mod transfer_room;
pub mod update_username;

#[cfg(test)]
pub(crate) mod test_support;

pub use add_admin::AddAdminUseCase;
pub use context::RoomCommandContext;
pub use create_room::CreateRoomUseCase;
pub use delete_message::DeleteMessageUseCase;
pub use error::UseCaseError;
pub use join_room::JoinRoomUseCase;
pub use leave_room::LeaveRoomUseCase;
pub use query_profile::ProfileQueryUseCase;
pub use query_room::RoomQueryUseCase;
pub use register_user::RegisterUserUseCase;
pub use remove_admin::RemoveAdminUseCase;
pub use send_message::SendMessageUseCase;
pub use transfer_room::TransferRoomUseCase;
pub use update_username::UpdateUsernameUseCase;
