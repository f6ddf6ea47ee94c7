//! Models shared by the mapper tests.
#![allow(dead_code)]

use docmap::model::Descriptor;
use docmap::{Attr, Builder, Model};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A builder with every fixture model registered.
pub fn builder() -> Builder {
    init_logging();

    let mut builder = Builder::new();
    builder
        .register::<User>()
        .register::<Address>()
        .register::<Post>()
        .register::<Author>()
        .register::<Anonymous>()
        .register::<Session>()
        .register::<Node>()
        .register::<Handle>()
        .register::<Counter>()
        .register::<Item>();
    builder
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct User {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i64>,
    pub address: Option<Address>,
    pub addresses: Vec<Address>,
    pub tags: Vec<String>,
    pub secret: Option<String>,
    pub nickname: Option<String>,
}

impl Model for User {
    fn class_name() -> &'static str {
        "app::User"
    }

    fn descriptor() -> Descriptor {
        Descriptor::builder::<Self>()
            .default_constructor()
            .field("id", "@Document")
            .field("firstName", "@Document")
            .field("email", r#"@Document(key = "mail")"#)
            .field("age", "@Document")
            .field(
                "address",
                r#"@Document(embed = "document", target = "app::Address")"#,
            )
            .field(
                "addresses",
                r#"@Document(embed = "collection", target = "app::Address")"#,
            )
            .field("tags", "@Document")
            .field("secret", "Never stored")
            .public_field(
                "nickname",
                "@Document",
                |user| user.nickname.clone().into(),
                |user, value| {
                    user.nickname = value.into_option()?;
                    Ok(())
                },
            )
            .accessor("getId", |user| user.id.clone().into())
            .mutator("setId", |user, value| {
                user.id = value.into_option()?;
                Ok(())
            })
            .accessor("getFirstName", |user| user.first_name.clone().into())
            .mutator("setFirstName", |user, value| {
                user.first_name = value.into_option()?;
                Ok(())
            })
            .accessor("getEmail", |user| user.email.clone().into())
            .mutator("setEmail", |user, value| {
                user.email = value.into_option()?;
                Ok(())
            })
            .accessor("getAge", |user| user.age.into())
            .mutator("setAge", |user, value| {
                user.age = value.into_option()?;
                Ok(())
            })
            .accessor("getAddress", |user| {
                user.address.clone().map(Attr::object).unwrap_or_default()
            })
            .mutator("setAddress", |user, value| {
                user.address = Some(value.into_model()?);
                Ok(())
            })
            .accessor("getAddresses", |user| Attr::objects(user.addresses.clone()))
            .mutator("setAddresses", |user, value| {
                user.addresses = value.into_models()?;
                Ok(())
            })
            .accessor("getTags", |user| user.tags.clone().into())
            .mutator("setTags", |user, value| {
                user.tags = value.into_list()?;
                Ok(())
            })
            .accessor("getSecret", |user| user.secret.clone().into())
            .mutator("setSecret", |user, value| {
                user.secret = value.into_option()?;
                Ok(())
            })
            .build()
    }
}

/// Only ever stored inside a user, so it has no identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Address {
    pub street: Option<String>,
    pub city: Option<String>,
}

impl Address {
    pub fn new(street: &str, city: &str) -> Self {
        Self {
            street: Some(street.to_string()),
            city: Some(city.to_string()),
        }
    }
}

impl Model for Address {
    fn class_name() -> &'static str {
        "app::Address"
    }

    fn descriptor() -> Descriptor {
        Descriptor::builder::<Self>()
            .default_constructor()
            .field("street", "@Document")
            .field("city", "@Document")
            .accessor("getStreet", |address| address.street.clone().into())
            .mutator("setStreet", |address, value| {
                address.street = value.into_option()?;
                Ok(())
            })
            .accessor("getCity", |address| address.city.clone().into())
            .mutator("setCity", |address, value| {
                address.city = value.into_option()?;
                Ok(())
            })
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Post {
    pub id: Option<String>,
    pub title: Option<String>,
    pub view_count: Option<i64>,
    pub author: Option<Author>,
    pub draft: Option<String>,
}

impl Model for Post {
    fn class_name() -> &'static str {
        "app::Post"
    }

    fn descriptor() -> Descriptor {
        Descriptor::builder::<Self>()
            .default_constructor()
            .field("id", "")
            .field("title", "The headline. @Document")
            .field("viewCount", "@Document")
            .field("author", "@Document")
            .field("draft", "@Document")
            .accessor("getId", |post| post.id.clone().into())
            .mutator("setId", |post, value| {
                post.id = value.into_option()?;
                Ok(())
            })
            .accessor("getTitle", |post| post.title.clone().into())
            .mutator("setTitle", |post, value| {
                post.title = value.into_option()?;
                Ok(())
            })
            .accessor("getViewCount", |post| post.view_count.into())
            .mutator("setViewCount", |post, value| {
                post.view_count = value.into_option()?;
                Ok(())
            })
            .accessor("getAuthor", |post| {
                post.author.clone().map(Attr::object).unwrap_or_default()
            })
            .private_accessor("getDraft", |post| post.draft.clone().into())
            .private_mutator("setDraft", |post, value| {
                post.draft = value.into_option()?;
                Ok(())
            })
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Author {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl Model for Author {
    fn class_name() -> &'static str {
        "app::Author"
    }

    fn descriptor() -> Descriptor {
        Descriptor::builder::<Self>()
            .default_constructor()
            .field("id", "")
            .field("name", "@Document")
            .accessor("getId", |author| author.id.clone().into())
            .mutator("setId", |author, value| {
                author.id = value.into_option()?;
                Ok(())
            })
            .accessor("getName", |author| author.name.clone().into())
            .mutator("setName", |author, value| {
                author.name = value.into_option()?;
                Ok(())
            })
            .build()
    }
}

/// Mapped fields but no identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Anonymous {
    pub name: Option<String>,
}

impl Model for Anonymous {
    fn class_name() -> &'static str {
        "app::Anonymous"
    }

    fn descriptor() -> Descriptor {
        Descriptor::builder::<Self>()
            .default_constructor()
            .field("name", "@Document")
            .accessor("getName", |anonymous| anonymous.name.clone().into())
            .mutator("setName", |anonymous, value| {
                anonymous.name = value.into_option()?;
                Ok(())
            })
            .build()
    }
}

/// Needs a token to be built, so it has no constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: Option<String>,
    pub token: String,
}

impl Session {
    pub fn new(token: &str) -> Self {
        Self {
            id: None,
            token: token.to_string(),
        }
    }
}

impl Model for Session {
    fn class_name() -> &'static str {
        "app::Session"
    }

    fn descriptor() -> Descriptor {
        Descriptor::builder::<Self>()
            .field("id", "")
            .field("token", "@Document")
            .accessor("getId", |session| session.id.clone().into())
            .mutator("setId", |session, value| {
                session.id = value.into_option()?;
                Ok(())
            })
            .accessor("getToken", |session| session.token.clone().into())
            .mutator("setToken", |session, value| {
                session.token = value.try_into()?;
                Ok(())
            })
            .build()
    }
}

/// Embeds itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    pub id: Option<String>,
    pub child: Option<Box<Node>>,
}

impl Model for Node {
    fn class_name() -> &'static str {
        "app::Node"
    }

    fn descriptor() -> Descriptor {
        Descriptor::builder::<Self>()
            .default_constructor()
            .field("id", "")
            .field(
                "child",
                r#"@Document(embed = "document", target = "app::Node")"#,
            )
            .accessor("getId", |node| node.id.clone().into())
            .mutator("setId", |node, value| {
                node.id = value.into_option()?;
                Ok(())
            })
            .accessor("getChild", |node| {
                node.child
                    .as_deref()
                    .cloned()
                    .map(Attr::object)
                    .unwrap_or_default()
            })
            .mutator("setChild", |node, value| {
                node.child = Some(Box::new(value.into_model()?));
                Ok(())
            })
            .build()
    }
}

/// Holds a live connection that has no document form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Handle {
    pub id: Option<String>,
}

impl Model for Handle {
    fn class_name() -> &'static str {
        "app::Handle"
    }

    fn descriptor() -> Descriptor {
        Descriptor::builder::<Self>()
            .default_constructor()
            .field("id", "")
            .field("socket", "@Document")
            .accessor("getId", |handle| handle.id.clone().into())
            .mutator("setId", |handle, value| {
                handle.id = value.into_option()?;
                Ok(())
            })
            .accessor("getSocket", |_| Attr::Opaque("tcp socket"))
            .mutator("setSocket", |_, _| Ok(()))
            .build()
    }
}

/// Only an identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Counter {
    pub id: Option<i64>,
}

impl Model for Counter {
    fn class_name() -> &'static str {
        "app::Counter"
    }

    fn descriptor() -> Descriptor {
        Descriptor::builder::<Self>()
            .default_constructor()
            .field("id", "")
            .accessor("getId", |counter| counter.id.into())
            .mutator("setId", |counter, value| {
                counter.id = value.into_option()?;
                Ok(())
            })
            .build()
    }
}

/// Stores its code under the identifier key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Item {
    pub id: Option<String>,
    pub code: Option<String>,
}

impl Model for Item {
    fn class_name() -> &'static str {
        "app::Item"
    }

    fn descriptor() -> Descriptor {
        Descriptor::builder::<Self>()
            .default_constructor()
            .field("id", "")
            .field("code", r#"@Document(key = "_id")"#)
            .accessor("getId", |item| item.id.clone().into())
            .mutator("setId", |item, value| {
                item.id = value.into_option()?;
                Ok(())
            })
            .accessor("getCode", |item| item.code.clone().into())
            .mutator("setCode", |item, value| {
                item.code = value.into_option()?;
                Ok(())
            })
            .build()
    }
}

pub fn ada() -> User {
    User {
        id: Some("u1".to_string()),
        first_name: Some("Ada".to_string()),
        email: Some("ada@example.com".to_string()),
        age: Some(36),
        address: Some(Address::new("12 St James's Square", "London")),
        addresses: vec![
            Address::new("1 Main Street", "Paris"),
            Address::new("2 Side Street", "Rome"),
        ],
        tags: vec!["math".to_string(), "engines".to_string()],
        secret: Some("hunter2".to_string()),
        nickname: Some("Countess".to_string()),
    }
}
