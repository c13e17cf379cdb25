//! SAIPRU - backend da feira de ciências
//!
//! Serviço HTTP em Actix Web para a gestão da feira: trabalhos,
//! avaliadores, questionário de avaliação, painel de acompanhamento
//! e apuração das premiações.
//!
//! # Arquitetura
//! - `cache`: camada de cache (Moka)
//! - `config`: gestão de configuração
//! - `entity`: entidades SeaORM do banco
//! - `errors`: tratamento unificado de erros
//! - `middlewares`: autenticação e autorização
//! - `models`: modelos de dados
//! - `routes`: camada de rotas da API
//! - `runtime`: ciclo de vida do servidor
//! - `services`: regras de negócio
//! - `storage`: camada de persistência (SeaORM)
//! - `utils`: funções utilitárias

pub mod cache;
pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
