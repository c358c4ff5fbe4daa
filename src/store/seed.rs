//! store::seed
//!
//! Fixed sample data loaded by [`Store::seeded`](super::Store::seeded).

use crate::core::model::{Account, Instructor, Post, Student};
use crate::core::types::{EntityId, Role, UtcTimestamp};

fn id(n: i64) -> EntityId {
    EntityId::from_number(n)
}

pub(super) fn accounts() -> Vec<Account> {
    vec![
        Account {
            id: id(1),
            email: "professor@blog.com".into(),
            secret: "123456".into(),
            role: Role::Instructor,
            name: "Professor Silva".into(),
        },
        Account {
            id: id(2),
            email: "aluno@blog.com".into(),
            secret: "123456".into(),
            role: Role::Student,
            name: "Aluno Costa".into(),
        },
    ]
}

pub(super) fn instructors() -> Vec<Instructor> {
    vec![
        Instructor {
            id: id(1),
            name: "Professor Silva".into(),
            email: "professor@blog.com".into(),
        },
        Instructor {
            id: id(2),
            name: "Professor Santos".into(),
            email: "professor.santos@blog.com".into(),
        },
    ]
}

pub(super) fn students() -> Vec<Student> {
    vec![
        Student {
            id: id(1),
            name: "Aluno Costa".into(),
            email: "aluno@blog.com".into(),
        },
        Student {
            id: id(2),
            name: "Aluno Oliveira".into(),
            email: "aluno.oliveira@blog.com".into(),
        },
        Student {
            id: id(3),
            name: "Aluno Ferreira".into(),
            email: "aluno.ferreira@blog.com".into(),
        },
    ]
}

pub(super) fn posts() -> Vec<Post> {
    let instructors = instructors();
    let silva = &instructors[0];
    let santos = &instructors[1];

    vec![
        Post {
            id: id(1),
            title: "Introdução ao React Native".into(),
            description: "Um guia completo sobre desenvolvimento mobile com React Native".into(),
            body: "React Native é um framework desenvolvido pelo Facebook que permite criar \
                   aplicativos móveis usando JavaScript e React. Ele permite escrever código \
                   uma vez e executá-lo tanto em iOS quanto Android.\n\n\
                   Principais vantagens:\n\
                   - Desenvolvimento rápido\n\
                   - Reutilização de código\n\
                   - Grande comunidade\n\
                   - Hot reload para desenvolvimento ágil"
                .into(),
            created_at: UtcTimestamp::from_ymd(2024, 1, 15),
            author: silva.clone(),
        },
        Post {
            id: id(2),
            title: "Expo vs React Native CLI".into(),
            description: "Comparação entre as principais ferramentas de desenvolvimento".into(),
            body: "Ao desenvolver aplicativos React Native, você tem duas opções principais: \
                   usar Expo ou React Native CLI.\n\n\
                   Expo oferece:\n\
                   - Configuração simplificada\n\
                   - SDKs prontos para usar\n\
                   - Build service na nuvem\n\
                   - Mais fácil para iniciantes\n\n\
                   React Native CLI oferece:\n\
                   - Mais controle sobre o projeto\n\
                   - Acesso a código nativo\n\
                   - Flexibilidade total\n\
                   - Melhor para projetos complexos"
                .into(),
            created_at: UtcTimestamp::from_ymd(2024, 1, 20),
            author: santos.clone(),
        },
        Post {
            id: id(3),
            title: "Navegação em React Native".into(),
            description: "Como implementar navegação eficiente em aplicativos móveis".into(),
            body: "React Navigation é a biblioteca padrão para navegação em React Native. \
                   Ela oferece várias opções:\n\n\
                   1. Stack Navigator - Para navegação hierárquica\n\
                   2. Tab Navigator - Para navegação por abas\n\
                   3. Drawer Navigator - Para menu lateral\n\n\
                   Cada tipo de navegação tem seu caso de uso específico. É importante \
                   escolher a opção certa para melhor experiência do usuário."
                .into(),
            created_at: UtcTimestamp::from_ymd(2024, 1, 25),
            author: silva.clone(),
        },
        Post {
            id: id(4),
            title: "Gerenciamento de Estado com Context API".into(),
            description: "Como gerenciar estado global em aplicações React Native".into(),
            body: "Context API é uma solução nativa do React para compartilhar estado entre \
                   componentes sem precisar passar props manualmente.\n\n\
                   Principais conceitos:\n\
                   - Provider: Componente que fornece o contexto\n\
                   - Consumer: Componente que consome o contexto\n\
                   - useContext: Hook para acessar o contexto\n\n\
                   É ideal para estados globais como autenticação, tema e configurações do \
                   usuário."
                .into(),
            created_at: UtcTimestamp::from_ymd(2024, 2, 1),
            author: santos.clone(),
        },
        Post {
            id: id(5),
            title: "Boas Práticas de Desenvolvimento Mobile".into(),
            description: "Dicas essenciais para criar aplicativos de qualidade".into(),
            body: "Ao desenvolver aplicativos móveis, é importante seguir algumas práticas:\n\n\
                   1. Performance:\n\
                   - Otimize imagens\n\
                   - Use FlatList para listas grandes\n\
                   - Evite re-renderizações desnecessárias\n\n\
                   2. UX/UI:\n\
                   - Design responsivo\n\
                   - Feedback visual para ações\n\
                   - Loading states apropriados\n\n\
                   3. Código:\n\
                   - Estrutura modular\n\
                   - Separação de responsabilidades\n\
                   - Testes unitários\n\
                   - Documentação clara"
                .into(),
            created_at: UtcTimestamp::from_ymd(2024, 2, 5),
            author: silva.clone(),
        },
    ]
}
