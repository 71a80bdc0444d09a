mod utils;
mod test_client {
    use crate::utils::{TOKEN_API, client_for, spawn_mock_d4sign};
    use d4sign_client::models::{DocumentSummary, Safe, SignerRecord};
    use d4sign_client::{D4SignApi, D4SignClientError};

    #[tokio::test]
    async fn test_safes_are_listed_and_records_without_id_dropped() -> eyre::Result<()> {
        let client = client_for(spawn_mock_d4sign().await?, TOKEN_API)?;
        let safes = client.list_safes().await?;
        assert_eq!(
            safes,
            vec![
                Safe {
                    id: "s1".into(),
                    name: "Contracts".into()
                },
                Safe {
                    id: "s2".into(),
                    name: "HR".into()
                },
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_wrong_credentials_surface_upstream_status() -> eyre::Result<()> {
        let client = client_for(spawn_mock_d4sign().await?, "wrong")?;
        let err = client.list_safes().await.unwrap_err();
        assert_eq!(
            err,
            D4SignClientError::UpstreamError {
                status: 401,
                message: "bad credentials".into()
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_safe_pages_are_requested_by_number() -> eyre::Result<()> {
        let client = client_for(spawn_mock_d4sign().await?, TOKEN_API)?;
        let first = client.list_safe_documents_page("s1", 1).await?;
        let second = client.list_safe_documents_page("s1", 2).await?;
        let third = client.list_safe_documents_page("s1", 3).await?;
        assert_eq!(first.len(), 2);
        assert_eq!(DocumentSummary::project_page(&first)[0].id, "d1");
        assert_eq!(DocumentSummary::project_page(&second)[0].id, "d2");
        assert!(third.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_error_taxonomy() -> eyre::Result<()> {
        let client = client_for(spawn_mock_d4sign().await?, TOKEN_API)?;
        assert!(matches!(
            client.list_safe_documents_page("broken", 1).await,
            Err(D4SignClientError::MalformedResponse(_))
        ));
        assert!(matches!(
            client.list_safe_documents_page("missing", 1).await,
            Err(D4SignClientError::NotFound(_))
        ));
        assert!(matches!(
            client.list_account_documents_page(2).await,
            Err(D4SignClientError::MalformedResponse(_))
        ));
        assert!(matches!(
            client.list_signers("../safes").await,
            Err(D4SignClientError::InvalidIdentifier(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_unavailable() -> eyre::Result<()> {
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        let addr = listener.local_addr()?;
        drop(listener);
        let client = client_for(url::Url::parse(&format!("http://{addr}/api/v1/"))?, TOKEN_API)?;
        assert!(matches!(
            client.list_safes().await,
            Err(D4SignClientError::UpstreamUnavailable(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_signers_listing_is_returned_untouched() -> eyre::Result<()> {
        let client = client_for(spawn_mock_d4sign().await?, TOKEN_API)?;
        let listing = client.list_signers("d1").await?;
        assert!(listing[0]["list"].is_array());
        let signers = SignerRecord::extract_all(&listing);
        assert_eq!(signers.len(), 2);
        assert_eq!(signers[0].phone.as_deref(), Some("+5511999990000"));

        let err = client.list_signers("d9").await.unwrap_err();
        assert!(err.to_string().contains("document lookup failed"));
        Ok(())
    }
}
