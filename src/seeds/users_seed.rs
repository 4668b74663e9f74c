use crate::store::UserStore;

/// Usuários criados na inicialização do serviço (recebem os ids 1, 2 e 3)
const DEFAULT_USERS: [(&str, &str); 3] = [
    ("Alice", "alice@example.com"),
    ("Bob", "bob@example.com"),
    ("Charlie", "charlie@example.com"),
];

/// Seed dos usuários padrão. Passa pelo `create` do store, então os ids
/// saem do mesmo contador usado pelas requisições. Só roda em store vazio.
pub fn seed_default_users(store: &UserStore) {
    if !store.is_empty() {
        log::info!("🌱 Users: store already has {} users, skipping seed", store.len());
        return;
    }

    for (name, email) in DEFAULT_USERS {
        let user = store.create(name, email);
        log::debug!("   👤 Seeded user {} ({}) with id {}", user.name, user.email, user.id);
    }

    log::info!("🌱 Users: seeded {} default users", DEFAULT_USERS.len());
}
